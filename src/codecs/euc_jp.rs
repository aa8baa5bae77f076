//! EUC-JP over JIS X 0208
//!
//! Three-byte JIS X 0212 sequences (`0x8F` prefix) are recognised and
//! reported invalid since that table is not carried.

use std::sync::OnceLock;

use crate::tables::jis0208::JIS0208_TO_UNICODE;
use crate::{Decoded, Decoder, Encoded, Encoder};

const HALF_WIDTH_KATAKANA: u32 = 0xFF61;
const SINGLE_SHIFT_2: u8 = 0x8E;
const SINGLE_SHIFT_3: u8 = 0x8F;

/// Cells per JIS X 0208 row
const CELLS: usize = 94;

struct Tables {
    /// `(row - 0x21) * 94 + (cell - 0x21)` -> code point, 0 when unmapped
    to_unicode: Box<[u16]>,
    /// BMP code point -> JIS X 0208 row/cell code, 0 when unmapped
    from_unicode: Box<[u16]>,
}

impl std::fmt::Debug for Tables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Tables")
    }
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut to_unicode = vec![0u16; CELLS * CELLS].into_boxed_slice();
        let mut from_unicode = vec![0u16; 1 << 16].into_boxed_slice();
        for &(jis, unicode) in JIS0208_TO_UNICODE.iter() {
            to_unicode[pointer(jis)] = unicode;
            if from_unicode[usize::from(unicode)] == 0 {
                from_unicode[usize::from(unicode)] = jis;
            }
        }
        tracing::debug!(entries = JIS0208_TO_UNICODE.len(), "built EUC-JP tables");
        Tables {
            to_unicode,
            from_unicode,
        }
    })
}

#[inline]
fn pointer(jis: u16) -> usize {
    let row = usize::from(jis >> 8) - 0x21;
    let cell = usize::from(jis & 0xFF) - 0x21;
    row * CELLS + cell
}

#[inline]
fn is_high(byte: u8) -> bool {
    (0xA1..=0xFE).contains(&byte)
}

/// Decodes EUC-JP
#[derive(Debug, Clone, Copy)]
pub struct EucJpDecoder {
    tables: &'static Tables,
}

impl EucJpDecoder {
    /// Decoder sharing the process-wide tables, building them if needed
    pub fn new() -> Self {
        Self { tables: tables() }
    }
}

impl Default for EucJpDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for EucJpDecoder {
    fn decode(&mut self, input: &[u8]) -> Decoded {
        let Some(&lead) = input.first() else {
            return Decoded::NO_ROOM;
        };
        if lead < 0x80 {
            return Decoded::success(lead as char, 1);
        }

        match lead {
            SINGLE_SHIFT_2 => match input.get(1) {
                None => Decoded::NO_ROOM,
                Some(&kana @ 0xA1..=0xDF) => {
                    match char::from_u32(HALF_WIDTH_KATAKANA + u32::from(kana - 0xA1)) {
                        Some(c) => Decoded::success(c, 2),
                        None => Decoded::invalid(2),
                    }
                }
                Some(_) => Decoded::invalid(1),
            },
            SINGLE_SHIFT_3 => match input.get(1..3) {
                None if input.iter().skip(1).all(|&b| is_high(b)) => Decoded::NO_ROOM,
                Some(&[a, b]) if is_high(a) && is_high(b) => Decoded::invalid(3),
                _ => Decoded::invalid(1),
            },
            _ if is_high(lead) => match input.get(1) {
                None => Decoded::NO_ROOM,
                Some(&trail) if is_high(trail) => {
                    let jis = u16::from_be_bytes([lead & 0x7F, trail & 0x7F]);
                    match self.tables.to_unicode[pointer(jis)] {
                        0 => Decoded::invalid(2),
                        unicode => match char::from_u32(u32::from(unicode)) {
                            Some(c) => Decoded::success(c, 2),
                            None => Decoded::invalid(2),
                        },
                    }
                }
                Some(_) => Decoded::invalid(1),
            },
            _ => Decoded::invalid(1),
        }
    }
}

/// Encodes EUC-JP, writing `?` for characters outside JIS X 0208
#[derive(Debug, Clone, Copy)]
pub struct EucJpEncoder {
    tables: &'static Tables,
}

impl EucJpEncoder {
    /// Encoder sharing the process-wide tables, building them if needed
    pub fn new() -> Self {
        Self { tables: tables() }
    }
}

impl Default for EucJpEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for EucJpEncoder {
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
            if output.len() < 2 {
                return Encoded::NO_ROOM;
            }
            output[0] = SINGLE_SHIFT_2;
            output[1] = (value - HALF_WIDTH_KATAKANA) as u8 + 0xA1;
            return Encoded::success(2);
        }

        let jis = match u16::try_from(value) {
            Ok(bmp) => self.tables.from_unicode[usize::from(bmp)],
            Err(_) => 0,
        };
        if jis == 0 {
            output[0] = b'?';
            return Encoded::invalid(1);
        }
        if output.len() < 2 {
            return Encoded::NO_ROOM;
        }
        output[..2].copy_from_slice(&(jis | 0x8080).to_be_bytes());
        Encoded::success(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecoderExt, EncoderExt};

    #[test]
    fn test_round_trip() {
        let bytes = b"\xa4\xb3\xa4\xec\xa4\xcf\xb4\xc1\xbb\xfa\xa4\xc7\xa4\xb9\xa1\xa3";
        assert_eq!(EucJpDecoder::new().convert_string(bytes), "これは漢字です。");
        assert_eq!(EucJpEncoder::new().convert_string("これは漢字です。"), bytes);
    }

    #[test]
    fn test_half_width_katakana() {
        let mut decoder = EucJpDecoder::new();
        assert_eq!(decoder.decode(b"\x8e\xb1"), Decoded::success('ｱ', 2));
        assert_eq!(decoder.decode(b"\x8e"), Decoded::NO_ROOM);
        assert_eq!(EucJpEncoder::new().convert_string("ｱ"), b"\x8e\xb1");
    }

    #[test]
    fn test_jis_x_0212_is_recognised_but_unsupported() {
        let mut decoder = EucJpDecoder::new();
        assert_eq!(decoder.decode(b"\x8f\xb0"), Decoded::NO_ROOM);
        assert_eq!(decoder.decode(b"\x8f\xb0\xa1"), Decoded::invalid(3));
        assert_eq!(decoder.decode(b"\x8fA"), Decoded::invalid(1));
    }

    #[test]
    fn test_malformed() {
        let mut decoder = EucJpDecoder::new();
        assert_eq!(decoder.decode(b"\xa4"), Decoded::NO_ROOM);
        assert_eq!(decoder.decode(b"\xa4A"), Decoded::invalid(1));
        assert_eq!(decoder.decode(b"\x80"), Decoded::invalid(1));
        assert_eq!(decoder.convert_string(b"\xa4A"), "\u{FFFD}A");
    }
}
