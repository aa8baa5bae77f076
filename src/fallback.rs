//! Decoder chains for input of uncertain charset

use crate::{Decoded, Decoder, Status};

/// Tries each decoder in turn on the same bytes and keeps the first result
/// that is not `InvalidChar`.
///
/// A common chain is strict UTF-8 backed by a single-byte charset. Bytes that
/// happen to be valid for an earlier decoder are always attributed to it.
pub struct FallbackDecoder {
    decoders: Vec<Box<dyn Decoder>>,
}

impl FallbackDecoder {
    /// Chain `decoders`, most preferred first
    pub fn new(decoders: Vec<Box<dyn Decoder>>) -> Self {
        Self { decoders }
    }

    /// Number of decoders in the chain
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// `true` for a chain with no decoders
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl std::fmt::Debug for FallbackDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackDecoder")
            .field("decoders", &self.decoders.len())
            .finish()
    }
}

impl Decoder for FallbackDecoder {
    fn decode(&mut self, input: &[u8]) -> Decoded {
        if input.is_empty() {
            return Decoded::NO_ROOM;
        }

        let mut result = Decoded::invalid(1);
        for decoder in &mut self.decoders {
            result = decoder.decode(input);
            if result.status != Status::InvalidChar {
                return result;
            }
        }
        result
    }

    fn decode_last(&mut self, input: &[u8]) -> Decoded {
        if input.is_empty() {
            return Decoded::NO_ROOM;
        }

        let mut result = Decoded::invalid(1);
        for decoder in &mut self.decoders {
            result = decoder.decode_last(input);
            if !matches!(result.status, Status::InvalidChar | Status::NoRoom) {
                return result;
            }
        }
        result
    }
}

/// Chain `decoders` into a [`FallbackDecoder`]
pub fn fallback(decoders: Vec<Box<dyn Decoder>>) -> FallbackDecoder {
    FallbackDecoder::new(decoders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecoderExt, DecodingReader, new_decoder};
    use std::io::Read;

    fn utf8_then_latin1() -> FallbackDecoder {
        fallback(vec![new_decoder("UTF-8").unwrap(), new_decoder("ISO-8859-1").unwrap()])
    }

    #[test]
    fn test_mixed_utf8_and_latin1() {
        let mut decoder = utf8_then_latin1();
        assert_eq!(decoder.len(), 2);
        assert_eq!(decoder.convert_string(b"r\xc3\xa9sum\xe9 "), "résumé ");
    }

    #[test]
    fn test_trailing_legacy_byte() {
        let mut input = "résum".as_bytes().to_vec();
        input.push(0xE9);
        assert_eq!(utf8_then_latin1().convert_string(&input), "résumé");

        let mut text = String::new();
        DecodingReader::new(input.as_slice(), utf8_then_latin1())
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "résumé");
    }

    #[test]
    fn test_no_room_is_not_a_failure() {
        let mut decoder = utf8_then_latin1();
        assert_eq!(decoder.decode(b"\xe6\xbc"), Decoded::NO_ROOM);
        assert_eq!(decoder.decode(b"\xe6\xbc\xa2"), Decoded::success('漢', 3));
    }

    #[test]
    fn test_every_decoder_fails() {
        let mut decoder = fallback(vec![
            new_decoder("UTF-8").unwrap(),
            new_decoder("Shift_JIS").unwrap(),
        ]);
        assert_eq!(decoder.decode(b"\x80"), Decoded::invalid(1));
        assert_eq!(decoder.convert_string(b"a\x80b"), "a\u{FFFD}b");
    }

    #[test]
    fn test_empty_chain() {
        let mut decoder = fallback(Vec::new());
        assert!(decoder.is_empty());
        assert_eq!(decoder.len(), 0);
        assert_eq!(decoder.decode(b""), Decoded::NO_ROOM);
        assert_eq!(decoder.decode(b"a"), Decoded::invalid(1));
    }
}
