//! Shift_JIS (JIS X 0201 single bytes plus JIS X 0208 double bytes)
//!
//! Single bytes below `0x80` pass through and `0xA1..=0xDF` map onto the
//! half-width katakana block at U+FF61. Double-byte codes are converted with
//! the Shift_JIS row/cell arithmetic from the JIS X 0208 table; the lookup
//! tables are built on first use and shared by every stream.

use std::sync::OnceLock;

use crate::tables::jis0208::JIS0208_TO_UNICODE;
use crate::{Decoded, Decoder, Encoded, Encoder};

/// First code point of the half-width katakana block
const HALF_WIDTH_KATAKANA: u32 = 0xFF61;

struct Tables {
    /// Double-byte Shift_JIS code -> code point, 0 when unmapped
    to_unicode: Box<[u16]>,
    /// BMP code point -> double-byte Shift_JIS code, 0 when unmapped
    from_unicode: Box<[u16]>,
}

impl std::fmt::Debug for Tables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Tables")
    }
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> Tables {
    let mut to_unicode = vec![0u16; 1 << 16].into_boxed_slice();
    let mut from_unicode = vec![0u16; 1 << 16].into_boxed_slice();

    for &(jis, unicode) in JIS0208_TO_UNICODE.iter() {
        let sjis = jis_to_sjis(jis);
        to_unicode[usize::from(sjis)] = unicode;
        // first mapping wins for code points listed twice
        if from_unicode[usize::from(unicode)] == 0 {
            from_unicode[usize::from(unicode)] = sjis;
        }
    }

    tracing::debug!(entries = JIS0208_TO_UNICODE.len(), "built Shift_JIS tables");
    Tables {
        to_unicode,
        from_unicode,
    }
}

/// Map a JIS X 0208 row/cell code (`0x2121..=0x7E7E`) to its Shift_JIS bytes
fn jis_to_sjis(jis: u16) -> u16 {
    let row = jis >> 8;
    let cell = jis & 0xFF;

    let lead = if row < 0x5F {
        (row + 1) / 2 + 0x70
    } else {
        (row + 1) / 2 + 0xB0
    };
    let trail = if row & 1 == 1 {
        cell + if cell >= 0x60 { 0x20 } else { 0x1F }
    } else {
        cell + 0x7E
    };

    (lead << 8) | trail
}

#[inline]
fn is_lead(byte: u8) -> bool {
    matches!(byte, 0x81..=0x9F | 0xE0..=0xEF)
}

#[inline]
fn is_trail(byte: u8) -> bool {
    matches!(byte, 0x40..=0x7E | 0x80..=0xFC)
}

/// Decodes Shift_JIS
#[derive(Debug, Clone, Copy)]
pub struct ShiftJisDecoder {
    tables: &'static Tables,
}

impl ShiftJisDecoder {
    /// Decoder sharing the process-wide tables, building them if needed
    pub fn new() -> Self {
        Self { tables: tables() }
    }
}

impl Default for ShiftJisDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for ShiftJisDecoder {
    fn decode(&mut self, input: &[u8]) -> Decoded {
        let Some(&lead) = input.first() else {
            return Decoded::NO_ROOM;
        };
        match lead {
            0x00..=0x7F => return Decoded::success(lead as char, 1),
            0xA1..=0xDF => {
                let value = HALF_WIDTH_KATAKANA + u32::from(lead - 0xA1);
                return match char::from_u32(value) {
                    Some(c) => Decoded::success(c, 1),
                    None => Decoded::invalid(1),
                };
            }
            _ if !is_lead(lead) => return Decoded::invalid(1),
            _ => {}
        }

        let Some(&trail) = input.get(1) else {
            return Decoded::NO_ROOM;
        };
        if !is_trail(trail) {
            // the trail byte may start the next character
            return Decoded::invalid(1);
        }

        let code = u16::from_be_bytes([lead, trail]);
        match self.tables.to_unicode[usize::from(code)] {
            // an ASCII trail byte is kept for the next character
            0 if trail < 0x80 => Decoded::invalid(1),
            0 => Decoded::invalid(2),
            unicode => match char::from_u32(u32::from(unicode)) {
                Some(c) => Decoded::success(c, 2),
                None => Decoded::invalid(2),
            },
        }
    }
}

/// Encodes Shift_JIS, writing `?` for characters outside its repertoire
#[derive(Debug, Clone, Copy)]
pub struct ShiftJisEncoder {
    tables: &'static Tables,
}

impl ShiftJisEncoder {
    /// Encoder sharing the process-wide tables, building them if needed
    pub fn new() -> Self {
        Self { tables: tables() }
    }
}

impl Default for ShiftJisEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for ShiftJisEncoder {
    fn encode(&mut self, output: &mut [u8], c: char) -> Encoded {
        if output.is_empty() {
            return Encoded::NO_ROOM;
        }

        let value = u32::from(c);
        if value < 0x80 {
            output[0] = value as u8;
            return Encoded::success(1);
        }
        if (HALF_WIDTH_KATAKANA..=HALF_WIDTH_KATAKANA + 0x3E).contains(&value) {
            output[0] = (value - HALF_WIDTH_KATAKANA) as u8 + 0xA1;
            return Encoded::success(1);
        }

        let code = match u16::try_from(value) {
            Ok(bmp) => self.tables.from_unicode[usize::from(bmp)],
            Err(_) => 0,
        };
        if code == 0 {
            output[0] = b'?';
            return Encoded::invalid(1);
        }
        if output.len() < 2 {
            return Encoded::NO_ROOM;
        }
        output[..2].copy_from_slice(&code.to_be_bytes());
        Encoded::success(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecoderExt, EncoderExt};

    const KANJI_TEXT: &str = "これは漢字です。";
    const KANJI_SJIS: &[u8] = b"\x82\xb1\x82\xea\x82\xcd\x8a\xbf\x8e\x9a\x82\xc5\x82\xb7\x81B";

    #[test]
    fn test_row_cell_arithmetic() {
        // first cell of the first row
        assert_eq!(jis_to_sjis(0x2121), 0x8140);
        // odd row, cell at the 0x7F gap
        assert_eq!(jis_to_sjis(0x2160), 0x8180);
        // even row
        assert_eq!(jis_to_sjis(0x2422), 0x82A0);
        // rows from 0x5F use the upper lead range
        assert_eq!(jis_to_sjis(0x5F21), 0xE040);
        assert_eq!(jis_to_sjis(0x7E7E), 0xEFFC);
    }

    #[test]
    fn test_round_trip_kanji() {
        assert_eq!(ShiftJisDecoder::new().convert_string(KANJI_SJIS), KANJI_TEXT);
        assert_eq!(ShiftJisEncoder::new().convert_string(KANJI_TEXT), KANJI_SJIS);
    }

    #[test]
    fn test_single_bytes() {
        let mut decoder = ShiftJisDecoder::new();
        assert_eq!(decoder.decode(b"A"), Decoded::success('A', 1));
        assert_eq!(decoder.decode(b"\xa1"), Decoded::success('\u{FF61}', 1));
        assert_eq!(decoder.decode(b"\xdf"), Decoded::success('\u{FF9F}', 1));

        let mut encoder = ShiftJisEncoder::new();
        assert_eq!(encoder.convert_string("ｱ"), b"\xb1");
    }

    #[test]
    fn test_truncated_double_byte() {
        let mut decoder = ShiftJisDecoder::new();
        assert_eq!(decoder.decode(b"\x8a"), Decoded::NO_ROOM);
        assert_eq!(decoder.decode(b""), Decoded::NO_ROOM);
    }

    #[test]
    fn test_invalid_sequences() {
        let mut decoder = ShiftJisDecoder::new();
        // not a lead byte
        assert_eq!(decoder.decode(b"\x80"), Decoded::invalid(1));
        assert_eq!(decoder.decode(b"\xfd\x40"), Decoded::invalid(1));
        // lead byte followed by ASCII keeps the ASCII byte
        assert_eq!(decoder.decode(b"\x82\x20"), Decoded::invalid(1));
        assert_eq!(decoder.convert_string(b"\x82A"), "\u{FFFD}A");
        // well-formed but unassigned
        assert_eq!(decoder.decode(b"\x85\x80"), Decoded::invalid(2));
        assert_eq!(decoder.decode(b"\x85\x40"), Decoded::invalid(1));
    }

    #[test]
    fn test_unassigned_pair_keeps_ascii_trail() {
        let mut decoder = ShiftJisDecoder::new();
        // 0x82 0x41 is in the trail range but unassigned
        assert_eq!(decoder.decode(b"\x82A"), Decoded::invalid(1));
        assert_eq!(decoder.convert_string(b"\x82Ab\x85\x80c"), "\u{FFFD}Ab\u{FFFD}c");
    }

    #[test]
    fn test_unencodable_writes_question_mark() {
        let mut encoder = ShiftJisEncoder::new();
        let mut buf = [0u8; 2];
        assert_eq!(encoder.encode(&mut buf, 'é'), Encoded::invalid(1));
        assert_eq!(buf[0], b'?');
        assert_eq!(encoder.encode(&mut buf, '😀'), Encoded::invalid(1));
        assert_eq!(encoder.encode(&mut buf[..1], '漢'), Encoded::NO_ROOM);
        assert_eq!(encoder.encode(&mut [], 'A'), Encoded::NO_ROOM);
    }

    #[test]
    fn test_tables_built_once_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| tables() as *const Tables as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }
}
