//! UTF-8, the baseline codec

use crate::{Decoded, Decoder, Encoded, Encoder};

/// Decodes UTF-8
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Decoder;

/// Encodes UTF-8
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Encoder;

impl Decoder for Utf8Decoder {
    fn decode(&mut self, input: &[u8]) -> Decoded {
        let Some(&lead) = input.first() else {
            return Decoded::NO_ROOM;
        };
        if lead < 0x80 {
            return Decoded::success(lead as char, 1);
        }

        // sequence length and the range allowed for the second byte, which
        // rules out overlong forms, surrogates and values past U+10FFFF
        let (len, second) = match lead {
            0xC2..=0xDF => (2, 0x80..=0xBF),
            0xE0 => (3, 0xA0..=0xBF),
            0xE1..=0xEC | 0xEE..=0xEF => (3, 0x80..=0xBF),
            0xED => (3, 0x80..=0x9F),
            0xF0 => (4, 0x90..=0xBF),
            0xF1..=0xF3 => (4, 0x80..=0xBF),
            0xF4 => (4, 0x80..=0x8F),
            _ => return Decoded::invalid(1),
        };

        let mut value = u32::from(lead) & (0x7F >> len);
        for i in 1..len {
            let Some(&byte) = input.get(i) else {
                return Decoded::NO_ROOM;
            };
            let allowed = if i == 1 {
                second.contains(&byte)
            } else {
                (0x80..=0xBF).contains(&byte)
            };
            if !allowed {
                return Decoded::invalid(1);
            }
            value = (value << 6) | u32::from(byte & 0x3F);
        }

        match char::from_u32(value) {
            Some(c) => Decoded::success(c, len),
            None => Decoded::invalid(1),
        }
    }
}

impl Encoder for Utf8Encoder {
    fn encode(&mut self, output: &mut [u8], c: char) -> Encoded {
        let len = c.len_utf8();
        if output.len() < len {
            return Encoded::NO_ROOM;
        }
        c.encode_utf8(output);
        Encoded::success(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    #[test]
    fn test_ascii_fast_path() {
        assert_eq!(Utf8Decoder.decode(b"abc"), Decoded::success('a', 1));
        assert_eq!(Utf8Decoder.decode(b"\x00"), Decoded::success('\0', 1));
    }

    #[test]
    fn test_multibyte_sequences() {
        assert_eq!(Utf8Decoder.decode("é!".as_bytes()), Decoded::success('é', 2));
        assert_eq!(Utf8Decoder.decode("漢".as_bytes()), Decoded::success('漢', 3));
        assert_eq!(Utf8Decoder.decode("𝄞".as_bytes()), Decoded::success('𝄞', 4));
    }

    #[test]
    fn test_truncated_sequence_needs_more_bytes() {
        let bytes = "漢".as_bytes();
        assert_eq!(Utf8Decoder.decode(&bytes[..1]), Decoded::NO_ROOM);
        assert_eq!(Utf8Decoder.decode(&bytes[..2]), Decoded::NO_ROOM);
        assert_eq!(Utf8Decoder.decode(&[]), Decoded::NO_ROOM);
    }

    #[test]
    fn test_malformed_consumes_only_the_lead_byte() {
        // lone continuation byte
        assert_eq!(Utf8Decoder.decode(b"\x80abc"), Decoded::invalid(1));
        // lead byte followed by ASCII
        assert_eq!(Utf8Decoder.decode(b"\xe9 "), Decoded::invalid(1));
        // overlong encoding of '/'
        assert_eq!(Utf8Decoder.decode(b"\xc0\xaf"), Decoded::invalid(1));
        assert_eq!(Utf8Decoder.decode(b"\xe0\x80\xaf"), Decoded::invalid(1));
        // encoded surrogate
        assert_eq!(Utf8Decoder.decode(b"\xed\xa0\x80"), Decoded::invalid(1));
        // past U+10FFFF
        assert_eq!(Utf8Decoder.decode(b"\xf4\x90\x80\x80"), Decoded::invalid(1));
        assert_eq!(Utf8Decoder.decode(b"\xff"), Decoded::invalid(1));
    }

    #[test]
    fn test_invalid_third_byte_is_not_no_room() {
        let decoded = Utf8Decoder.decode(b"\xe6\xbc");
        assert_eq!(decoded.status, Status::NoRoom);
        let decoded = Utf8Decoder.decode(b"\xe6\xbcA");
        assert_eq!(decoded, Decoded::invalid(1));
    }

    #[test]
    fn test_encode() {
        let mut buf = [0u8; 4];
        assert_eq!(Utf8Encoder.encode(&mut buf, '€'), Encoded::success(3));
        assert_eq!(&buf[..3], "€".as_bytes());
        assert_eq!(Utf8Encoder.encode(&mut buf[..2], '€'), Encoded::NO_ROOM);
        assert_eq!(Utf8Encoder.encode(&mut buf[..1], 'A'), Encoded::success(1));
    }
}
