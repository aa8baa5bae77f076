//! Decoder for HTML character references (`&amp;`, `&#233;`, `&#xE9;`)
//!
//! Anything that is not a well-formed reference, including a bare `&`, passes
//! through one byte at a time as the code point of the same value, so the
//! decoder never reports `InvalidChar`. Put a charset decoder behind it in a
//! [`FallbackDecoder`](crate::FallbackDecoder) to read the surrounding text.

use crate::tables::entities::{C1_REMAP, ENTITIES};
use crate::{Decoded, Decoder, REPLACEMENT_CHARACTER};

/// Longest named reference the decoder waits for before deciding with what it has
const MAX_REFERENCE_LEN: usize = 40;

/// Decodes character references, passing other bytes through
#[derive(Debug, Clone, Default)]
pub struct EntityDecoder {
    /// Second code point of a two-code-point reference and the span to consume
    pending: Option<(char, usize)>,
}

impl EntityDecoder {
    /// A decoder with nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    fn decode_reference(&mut self, input: &[u8], last: bool) -> Decoded {
        if let Some((c, consumed)) = self.pending.take() {
            return Decoded::success(c, consumed);
        }

        let Some(&first) = input.first() else {
            return Decoded::NO_ROOM;
        };
        if first != b'&' {
            return Decoded::success(char::from(first), 1);
        }

        // digit runs have no length limit; names longer than the table's are
        // resolved with the bytes at hand
        let reference = match input.get(1) {
            Some(b'#') => numeric(input, !last),
            Some(_) => named(input, !last && input.len() < MAX_REFERENCE_LEN),
            None if !last => Reference::Incomplete,
            None => Reference::Literal,
        };

        match reference {
            Reference::Incomplete => Decoded::NO_ROOM,
            Reference::Literal => Decoded::success('&', 1),
            Reference::Single(c, consumed) => Decoded::success(c, consumed),
            Reference::Pair(c, second, consumed) => {
                self.pending = Some((second, consumed));
                Decoded::success(c, 0)
            }
        }
    }
}

impl Decoder for EntityDecoder {
    fn decode(&mut self, input: &[u8]) -> Decoded {
        self.decode_reference(input, false)
    }

    fn decode_last(&mut self, input: &[u8]) -> Decoded {
        self.decode_reference(input, true)
    }
}

/// Fresh [`EntityDecoder`]
pub fn entity_decoder() -> EntityDecoder {
    EntityDecoder::new()
}

enum Reference {
    /// The bytes at hand end inside what could still be a reference
    Incomplete,
    /// Not a reference
    Literal,
    Single(char, usize),
    Pair(char, char, usize),
}

/// `&#123;` or `&#x7B;`, terminator optional
fn numeric(input: &[u8], open: bool) -> Reference {
    let (radix, digits_start) = match input.get(2) {
        None if open => return Reference::Incomplete,
        None => return Reference::Literal,
        Some(b'x' | b'X') => (16, 3),
        Some(_) => (10, 2),
    };

    let digits = input[digits_start..]
        .iter()
        .take_while(|&&b| char::from(b).is_digit(radix))
        .count();
    let mut end = digits_start + digits;
    if end == input.len() && open {
        // more digits or a terminator may follow
        return Reference::Incomplete;
    }
    if digits == 0 {
        return Reference::Literal;
    }

    let value = input[digits_start..end].iter().fold(0u32, |value, &b| {
        let digit = char::from(b).to_digit(radix).unwrap_or(0);
        value.saturating_mul(radix).saturating_add(digit)
    });
    if input.get(end) == Some(&b';') {
        end += 1;
    }

    Reference::Single(numeric_char(value), end)
}

fn numeric_char(value: u32) -> char {
    match value {
        0 => REPLACEMENT_CHARACTER,
        0x80..=0x9F => char::from_u32(u32::from(C1_REMAP[(value - 0x80) as usize]))
            .unwrap_or(REPLACEMENT_CHARACTER),
        _ => char::from_u32(value).unwrap_or(REPLACEMENT_CHARACTER),
    }
}

/// `&name;`, or a legacy name with no terminator
fn named(input: &[u8], open: bool) -> Reference {
    let run = input[1..].iter().take_while(|b| b.is_ascii_alphanumeric()).count();
    let end = 1 + run;
    if run == 0 {
        return Reference::Literal;
    }
    if end == input.len() && open {
        return Reference::Incomplete;
    }

    if input.get(end) == Some(&b';') {
        if let Some(reference) = lookup(&input[1..=end]) {
            return reference;
        }
    }

    // longest unterminated legacy name that prefixes the run
    (1..=run)
        .rev()
        .find_map(|len| lookup(&input[1..1 + len]))
        .unwrap_or(Reference::Literal)
}

fn lookup(name: &[u8]) -> Option<Reference> {
    let index = ENTITIES
        .binary_search_by(|(candidate, _, _)| candidate.as_bytes().cmp(name))
        .ok()?;
    let (_, first, second) = ENTITIES[index];
    let consumed = 1 + name.len();
    Some(match second {
        Some(second) => Reference::Pair(first, second, consumed),
        None => Reference::Single(first, consumed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecoderExt, Status, fallback, new_decoder};

    fn unescape(input: &str) -> String {
        EntityDecoder::new().convert_string(input.as_bytes())
    }

    #[test]
    fn test_mixed_references_with_latin1_fallback() {
        let escaped = "&notit; I'm &notin; I tell you&#X82&#32;&nLt; ";
        let mut decoder = fallback(vec![
            Box::new(EntityDecoder::new()) as Box<dyn Decoder>,
            new_decoder("ISO-8859-1").unwrap(),
        ]);
        assert_eq!(
            decoder.convert_string(escaped.as_bytes()),
            "¬it; I'm ∉ I tell you\u{201A} \u{226A}\u{20D2} "
        );
    }

    #[test]
    fn test_named_references() {
        assert_eq!(unescape("&amp;&lt;&gt;&quot;"), "&<>\"");
        assert_eq!(unescape("caf&eacute;"), "café");
        assert_eq!(unescape("&CounterClockwiseContourIntegral;"), "\u{2233}");
        // legacy names work without the terminator
        assert_eq!(unescape("&copy 2024"), "© 2024");
        assert_eq!(unescape("&ampfoo"), "&foo");
    }

    #[test]
    fn test_numeric_references() {
        assert_eq!(unescape("&#65;&#x42;&#X43"), "ABC");
        assert_eq!(unescape("&#128512;"), "😀");
        assert_eq!(unescape("&#x80;&#150;"), "€–");
        assert_eq!(
            unescape("&#0;&#xD800;&#x110000;&#99999999999;"),
            "\u{FFFD}".repeat(4)
        );
    }

    #[test]
    fn test_not_references() {
        assert_eq!(unescape("a & b"), "a & b");
        assert_eq!(unescape("&#;&#x;"), "&#;&#x;");
        assert_eq!(unescape("&bogus;"), "&bogus;");
        assert_eq!(unescape("AT&T"), "AT&T");
        assert_eq!(unescape("&"), "&");
    }

    #[test]
    fn test_waits_for_complete_reference() {
        let mut decoder = EntityDecoder::new();
        for partial in ["&", "&#", "&#x", "&#12", "&am"] {
            let decoded = decoder.decode(partial.as_bytes());
            assert_eq!(decoded, Decoded::NO_ROOM, "decoding {partial:?}");
        }
        assert_eq!(decoder.decode_last(b"&#12"), Decoded::success('\u{C}', 4));
        assert_eq!(decoder.decode_last(b"&am"), Decoded::success('&', 1));
    }

    #[test]
    fn test_overlong_name_is_resolved() {
        let long = format!("&{}", "a".repeat(MAX_REFERENCE_LEN));
        assert_eq!(EntityDecoder::new().decode(long.as_bytes()), Decoded::success('&', 1));
    }

    #[test]
    fn test_long_digit_run_waits_for_the_end() {
        let zeros = format!("&#{}", "0".repeat(MAX_REFERENCE_LEN + 5));
        let mut decoder = EntityDecoder::new();
        assert_eq!(decoder.decode(zeros.as_bytes()), Decoded::NO_ROOM);

        let complete = format!("{zeros}65; x");
        assert_eq!(decoder.decode(complete.as_bytes()), Decoded::success('A', zeros.len() + 3));
        assert_eq!(unescape(&complete), "A x");
    }

    #[test]
    fn test_two_code_point_reference() {
        let mut decoder = EntityDecoder::new();
        let input = b"&nLt;x";
        assert_eq!(decoder.decode(input), Decoded::success('\u{226A}', 0));
        assert_eq!(decoder.decode(input), Decoded::success('\u{20D2}', 5));
        assert_eq!(decoder.decode(&input[5..]), Decoded::success('x', 1));
    }

    #[test]
    fn test_never_invalid() {
        let mut decoder = EntityDecoder::new();
        for byte in 0..=u8::MAX {
            assert_ne!(decoder.decode(&[byte, b' ']).status, Status::InvalidChar);
        }
    }

    #[test]
    fn test_split_anywhere() {
        let escaped = b"x &notin; &#x263A;&nLt; &amp &zz;";
        let whole = unescape(std::str::from_utf8(escaped).unwrap());
        for cut in 0..=escaped.len() {
            let mut decoder = EntityDecoder::new();
            let head = decoder.translate(&escaped[..cut], false);
            let tail = decoder.translate(&escaped[head.consumed..], true);
            let joined = [head.output, tail.output].concat();
            assert_eq!(String::from_utf8(joined).unwrap(), whole, "split at {cut}");
        }
    }
}
