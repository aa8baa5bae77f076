//! UTF-16 in both byte orders, plus the byte-order-mark sniffing variant
//!
//! `UTF-16BE` and `UTF-16LE` are fixed-order and stateless. Plain `UTF-16`
//! reads an optional byte-order mark at the start of the stream (big-endian
//! when absent) and always writes `FE FF` before the first character.

use crate::registry::{Charset, Registry};
use crate::{Decoded, Decoder, Encoded, Encoder};

/// Byte order of 16-bit code units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Most significant byte first
    Big,
    /// Least significant byte first
    Little,
}

impl Endian {
    #[inline]
    fn unit(self, bytes: [u8; 2]) -> u16 {
        match self {
            Endian::Big => u16::from_be_bytes(bytes),
            Endian::Little => u16::from_le_bytes(bytes),
        }
    }

    #[inline]
    fn write(self, unit: u16, out: &mut [u8]) {
        let bytes = match self {
            Endian::Big => unit.to_be_bytes(),
            Endian::Little => unit.to_le_bytes(),
        };
        out[..2].copy_from_slice(&bytes);
    }
}

pub(crate) fn register(registry: &mut Registry) {
    registry.register(Charset::new(
        "UTF-16",
        &["csUTF16"],
        || Box::new(Utf16BomDecoder::new()),
        || Box::new(Utf16BomEncoder::new()),
    ));
    registry.register(Charset::new(
        "UTF-16BE",
        &["csUTF16BE"],
        || Box::new(Utf16Decoder::new(Endian::Big)),
        || Box::new(Utf16Encoder::new(Endian::Big)),
    ));
    registry.register(Charset::new(
        "UTF-16LE",
        &["csUTF16LE"],
        || Box::new(Utf16Decoder::new(Endian::Little)),
        || Box::new(Utf16Encoder::new(Endian::Little)),
    ));
}

/// Decodes UTF-16 in a fixed byte order
#[derive(Debug, Clone, Copy)]
pub struct Utf16Decoder {
    endian: Endian,
}

impl Utf16Decoder {
    /// Decoder for `endian` code units
    pub fn new(endian: Endian) -> Self {
        Self { endian }
    }
}

impl Decoder for Utf16Decoder {
    fn decode(&mut self, input: &[u8]) -> Decoded {
        let [a, b, ..] = *input else {
            return Decoded::NO_ROOM;
        };
        let first = self.endian.unit([a, b]);
        if !(0xD800..=0xDFFF).contains(&first) {
            // every non-surrogate unit is a scalar value
            return match char::from_u32(u32::from(first)) {
                Some(c) => Decoded::success(c, 2),
                None => Decoded::invalid(2),
            };
        }

        let [_, _, c, d, ..] = *input else {
            return Decoded::NO_ROOM;
        };
        let second = self.endian.unit([c, d]);
        if (0xD800..=0xDBFF).contains(&first) && (0xDC00..=0xDFFF).contains(&second) {
            let value =
                0x10000 + ((u32::from(first) - 0xD800) << 10) + (u32::from(second) - 0xDC00);
            if let Some(c) = char::from_u32(value) {
                return Decoded::success(c, 4);
            }
        }
        Decoded::invalid(2)
    }
}

/// Encodes UTF-16 in a fixed byte order
#[derive(Debug, Clone, Copy)]
pub struct Utf16Encoder {
    endian: Endian,
}

impl Utf16Encoder {
    /// Encoder for `endian` code units
    pub fn new(endian: Endian) -> Self {
        Self { endian }
    }
}

impl Encoder for Utf16Encoder {
    fn encode(&mut self, output: &mut [u8], c: char) -> Encoded {
        let mut units = [0u16; 2];
        let units = c.encode_utf16(&mut units);
        let len = units.len() * 2;
        if output.len() < len {
            return Encoded::NO_ROOM;
        }
        for (unit, out) in units.iter().zip(output.chunks_exact_mut(2)) {
            self.endian.write(*unit, out);
        }
        Encoded::success(len)
    }
}

/// Decodes UTF-16, choosing the byte order from a leading byte-order mark
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16BomDecoder {
    inner: Option<Utf16Decoder>,
}

impl Utf16BomDecoder {
    /// Decoder that has not yet seen the start of its stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte order in effect, once the stream start has been examined
    pub fn endian(&self) -> Option<Endian> {
        self.inner.map(|inner| inner.endian)
    }
}

impl Decoder for Utf16BomDecoder {
    fn decode(&mut self, input: &[u8]) -> Decoded {
        if let Some(inner) = self.inner.as_mut() {
            return inner.decode(input);
        }

        let [a, b, ..] = *input else {
            return Decoded::NO_ROOM;
        };
        let (endian, mark) = match [a, b] {
            [0xFE, 0xFF] => (Endian::Big, true),
            [0xFF, 0xFE] => (Endian::Little, true),
            _ => (Endian::Big, false),
        };

        let inner = self.inner.insert(Utf16Decoder::new(endian));
        if mark {
            Decoded::state_only(2)
        } else {
            inner.decode(input)
        }
    }
}

/// Encodes big-endian UTF-16 behind a single leading byte-order mark
#[derive(Debug, Clone, Copy)]
pub struct Utf16BomEncoder {
    wrote_bom: bool,
    inner: Utf16Encoder,
}

impl Utf16BomEncoder {
    /// Encoder that will open its stream with `FE FF`
    pub fn new() -> Self {
        Self {
            wrote_bom: false,
            inner: Utf16Encoder::new(Endian::Big),
        }
    }
}

impl Default for Utf16BomEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for Utf16BomEncoder {
    fn encode(&mut self, output: &mut [u8], c: char) -> Encoded {
        if self.wrote_bom {
            return self.inner.encode(output, c);
        }
        if output.len() < 2 {
            return Encoded::NO_ROOM;
        }
        output[..2].copy_from_slice(&[0xFE, 0xFF]);
        self.wrote_bom = true;
        Encoded::state_only(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecoderExt, EncoderExt, Status};

    #[test]
    fn test_fixed_byte_orders() {
        let mut be = Utf16Decoder::new(Endian::Big);
        let mut le = Utf16Decoder::new(Endian::Little);
        assert_eq!(be.decode(b"\x00A"), Decoded::success('A', 2));
        assert_eq!(le.decode(b"A\x00"), Decoded::success('A', 2));
        assert_eq!(be.decode(b"\x00"), Decoded::NO_ROOM);
    }

    #[test]
    fn test_surrogate_pair() {
        let mut be = Utf16Decoder::new(Endian::Big);
        assert_eq!(be.decode(b"\xd8\x34\xdd\x1e"), Decoded::success('𝄞', 4));
        // a high surrogate alone cannot be judged yet
        assert_eq!(be.decode(b"\xd8\x34\xdd"), Decoded::NO_ROOM);

        let mut le = Utf16Decoder::new(Endian::Little);
        assert_eq!(le.decode(b"\x34\xd8\x1e\xdd"), Decoded::success('𝄞', 4));
    }

    #[test]
    fn test_lone_surrogates_consume_two_bytes() {
        let mut be = Utf16Decoder::new(Endian::Big);
        // high surrogate followed by a regular unit
        assert_eq!(be.decode(b"\xd8\x34\x00A"), Decoded::invalid(2));
        // low surrogate first
        assert_eq!(be.decode(b"\xdd\x1e\x00A"), Decoded::invalid(2));
        assert_eq!(be.convert_string(b"\xdd\x1e\x00A"), "\u{FFFD}A");
    }

    #[test]
    fn test_bom_sniffing() {
        let mut decoder = Utf16BomDecoder::new();
        assert_eq!(decoder.decode(b"\xfe"), Decoded::NO_ROOM);
        assert_eq!(decoder.endian(), None);
        assert_eq!(decoder.decode(b"\xfe\xff\x00A").status, Status::StateOnly);
        assert_eq!(decoder.endian(), Some(Endian::Big));
        assert_eq!(decoder.decode(b"\x00A"), Decoded::success('A', 2));

        assert_eq!(Utf16BomDecoder::new().convert_string(b"\xfe\xff\x00A"), "A");
        assert_eq!(Utf16BomDecoder::new().convert_string(b"\xff\xfeA\x00"), "A");
    }

    #[test]
    fn test_missing_bom_defaults_to_big_endian() {
        let mut decoder = Utf16BomDecoder::new();
        assert_eq!(decoder.decode(b"\x00A"), Decoded::success('A', 2));
        assert_eq!(decoder.endian(), Some(Endian::Big));
        // a BOM after the start is an ordinary character
        assert_eq!(decoder.decode(b"\xfe\xff"), Decoded::success('\u{FEFF}', 2));
    }

    #[test]
    fn test_bom_encoder_writes_mark_once() {
        let mut encoder = Utf16BomEncoder::new();
        assert_eq!(encoder.convert_string("A"), b"\xfe\xff\x00A");
        assert_eq!(encoder.convert_string("B"), b"\x00B");

        let mut buf = [0u8; 1];
        assert_eq!(Utf16BomEncoder::new().encode(&mut buf, 'A'), Encoded::NO_ROOM);
    }

    #[test]
    fn test_encode_supplementary_plane() {
        let mut le = Utf16Encoder::new(Endian::Little);
        let mut buf = [0u8; 4];
        assert_eq!(le.encode(&mut buf, '𝄞'), Encoded::success(4));
        assert_eq!(buf, [0x34, 0xD8, 0x1E, 0xDD]);
        assert_eq!(le.encode(&mut buf[..3], '𝄞'), Encoded::NO_ROOM);
    }
}
