//! Batch conversion: one decoder and one encoder driven over a whole buffer

use crate::codecs::utf8::{Utf8Decoder, Utf8Encoder};
use crate::{Decoder, Encoder, Error, REPLACEMENT_CHARACTER, Result, Status, encode_into, registry};

/// Outcome of [`Translator::translate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Input bytes consumed; resume from here when more input arrives
    pub consumed: usize,
    /// Converted bytes
    pub output: Vec<u8>,
    /// `false` if any character was substituted or a truncated tail dropped
    pub success: bool,
}

/// Converts from one charset to another through a decoder/encoder pair
#[derive(Debug)]
pub struct Translator<D, E> {
    decoder: D,
    encoder: E,
}

impl Translator<Box<dyn Decoder>, Box<dyn Encoder>> {
    /// Translator between two registered charsets
    pub fn for_names(from: &str, to: &str) -> Result<Self> {
        let unknown = |name: &str| Error::UnknownCharset {
            name: name.to_string(),
        };
        let decoder = registry::new_decoder(from).ok_or_else(|| unknown(from))?;
        let encoder = registry::new_encoder(to).ok_or_else(|| unknown(to))?;
        Ok(Self::new(decoder, encoder))
    }
}

impl<D: Decoder, E: Encoder> Translator<D, E> {
    /// Pair `decoder` with `encoder`
    pub fn new(decoder: D, encoder: E) -> Self {
        Self { decoder, encoder }
    }

    /// Convert as much of `input` as possible.
    ///
    /// When `end_of_input` is false, a character cut off by the end of `input`
    /// is left unconsumed so the caller can retry from
    /// [`consumed`](Translation::consumed) with more bytes. When it is true, such a
    /// tail is dropped and the translation reports failure.
    pub fn translate(&mut self, input: &[u8], end_of_input: bool) -> Translation {
        let mut output = Vec::with_capacity(input.len());
        let mut success = true;
        let mut pos = 0;

        while pos < input.len() {
            let rest = &input[pos..];
            let mut decoded = self.decoder.decode(rest);
            if decoded.status == Status::NoRoom && end_of_input {
                decoded = self.decoder.decode_last(rest);
            }

            match decoded.status {
                Status::Success => {
                    success &= encode_into(&mut self.encoder, decoded.code_point, &mut output);
                    pos += decoded.consumed;
                }
                Status::InvalidChar => {
                    success = false;
                    encode_into(&mut self.encoder, REPLACEMENT_CHARACTER, &mut output);
                    pos += decoded.consumed.max(1);
                }
                Status::StateOnly => pos += decoded.consumed,
                Status::NoRoom => {
                    if end_of_input {
                        success = false;
                        pos = input.len();
                    }
                    break;
                }
            }
        }

        Translation {
            consumed: pos.min(input.len()),
            output,
            success,
        }
    }

    /// Convert all of `input`, substituting where needed
    pub fn convert(&mut self, input: &[u8]) -> Vec<u8> {
        self.translate(input, true).output
    }

    /// Convert all of `input`, failing at the first substitution
    pub fn convert_strict(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len());
        let mut pos = 0;

        while pos < input.len() {
            let rest = &input[pos..];
            let mut decoded = self.decoder.decode(rest);
            if decoded.status == Status::NoRoom {
                decoded = self.decoder.decode_last(rest);
            }

            match decoded.status {
                Status::Success => {
                    if !encode_into(&mut self.encoder, decoded.code_point, &mut output) {
                        return Err(Error::Unmappable {
                            character: decoded.code_point,
                            position: pos,
                        });
                    }
                    pos += decoded.consumed;
                }
                Status::InvalidChar => return Err(Error::InvalidSequence { position: pos }),
                Status::StateOnly => pos += decoded.consumed,
                Status::NoRoom => return Err(Error::Truncated { position: pos }),
            }
        }

        Ok(output)
    }

    /// Give back the decoder and encoder
    pub fn into_parts(self) -> (D, E) {
        (self.decoder, self.encoder)
    }
}

/// Convert `input` from charset `from` to charset `to`
pub fn convert_string(from: &str, to: &str, input: &[u8]) -> Result<Vec<u8>> {
    Ok(Translator::for_names(from, to)?.convert(input))
}

/// Batch helpers for a lone decoder, producing UTF-8
pub trait DecoderExt: Decoder {
    /// [`Translator::translate`] into UTF-8
    fn translate(&mut self, input: &[u8], end_of_input: bool) -> Translation {
        Translator::new(self, Utf8Encoder).translate(input, end_of_input)
    }

    /// Decode all of `input` into a string, substituting U+FFFD where needed
    fn convert_string(&mut self, input: &[u8]) -> String {
        let output = Translator::new(self, Utf8Encoder).convert(input);
        String::from_utf8_lossy(&output).into_owned()
    }
}

impl<D: Decoder + ?Sized> DecoderExt for D {}

/// Batch helpers for a lone encoder, consuming UTF-8
pub trait EncoderExt: Encoder {
    /// [`Translator::translate`] from UTF-8
    fn translate(&mut self, input: &[u8], end_of_input: bool) -> Translation {
        Translator::new(Utf8Decoder, self).translate(input, end_of_input)
    }

    /// Encode all of `input`, writing the charset's substitute where needed
    fn convert_string(&mut self, input: &str) -> Vec<u8> {
        Translator::new(Utf8Decoder, self).convert(input.as_bytes())
    }
}

impl<E: Encoder + ?Sized> EncoderExt for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decoded, new_decoder};
    use proptest::prelude::*;

    fn utf8_to_utf16le() -> Translator<Box<dyn Decoder>, Box<dyn Encoder>> {
        Translator::for_names("UTF-8", "UTF-16LE").unwrap()
    }

    #[test]
    fn test_translate_between_charsets() {
        let mut translator = Translator::for_names("ISO-8859-1", "Shift_JIS").unwrap();
        let translation = translator.translate(b"caf\xe9", true);
        // é has no Shift_JIS form
        assert_eq!(translation.output, b"caf?");
        assert!(!translation.success);
        assert_eq!(translation.consumed, 4);
    }

    #[test]
    fn test_partial_input_stops_early() {
        let mut translator = utf8_to_utf16le();
        let bytes = "a漢".as_bytes();
        let translation = translator.translate(&bytes[..2], false);
        assert_eq!(translation.consumed, 1);
        assert_eq!(translation.output, b"a\x00");
        assert!(translation.success);

        let rest = translator.translate(&bytes[1..], false);
        assert_eq!(rest.consumed, 3);
        assert_eq!(rest.output, 0x6F22u16.to_le_bytes());
    }

    #[test]
    fn test_truncated_tail_dropped_at_end() {
        let mut translator = utf8_to_utf16le();
        let bytes = "a漢".as_bytes();
        let translation = translator.translate(&bytes[..3], true);
        assert_eq!(translation.consumed, 3);
        assert_eq!(translation.output, b"a\x00");
        assert!(!translation.success);
    }

    #[test]
    fn test_invalid_input_continues() {
        let mut decoder = new_decoder("UTF-8").unwrap();
        let translation = decoder.translate(b"a\xffb", true);
        assert_eq!(translation.output, "a\u{FFFD}b".as_bytes());
        assert_eq!(translation.consumed, 3);
        assert!(!translation.success);
    }

    #[test]
    fn test_state_only_emits_nothing() {
        let mut decoder = new_decoder("UTF-16").unwrap();
        let translation = decoder.translate(b"\xff\xfe", true);
        assert_eq!(translation.consumed, 2);
        assert!(translation.output.is_empty());
        assert!(translation.success);
    }

    #[test]
    fn test_invalid_without_progress_still_advances() {
        struct Grumpy;
        impl Decoder for Grumpy {
            fn decode(&mut self, _input: &[u8]) -> Decoded {
                Decoded::invalid(0)
            }
        }

        let translation = Grumpy.translate(b"xyz", true);
        assert_eq!(translation.consumed, 3);
        assert_eq!(translation.output, "\u{FFFD}\u{FFFD}\u{FFFD}".as_bytes());
    }

    #[test]
    fn test_convert_strict_reports_positions() {
        let mut translator = Translator::for_names("UTF-8", "ISO-8859-1").unwrap();
        assert_eq!(translator.convert_strict("déjà".as_bytes()).unwrap(), b"d\xe9j\xe0");

        let err = translator.convert_strict(b"ab\xffcd").unwrap_err();
        assert!(matches!(err, Error::InvalidSequence { position: 2 }));

        let err = translator.convert_strict("a€".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Unmappable { character: '€', position: 1 }));

        let err = translator.convert_strict(b"a\xe2\x82").unwrap_err();
        assert!(matches!(err, Error::Truncated { position: 1 }));
    }

    #[test]
    fn test_into_parts_keeps_stream_state() {
        let mut translator = Translator::for_names("UTF-16", "UTF-8").unwrap();
        let translation = translator.translate(b"\xff\xfe", false);
        assert_eq!(translation.consumed, 2);

        let (mut decoder, mut encoder) = translator.into_parts();
        // little-endian from the byte-order mark already read
        assert_eq!(decoder.decode(b"A\x00"), Decoded::success('A', 2));
        assert_eq!(encoder.convert_string("é"), "é".as_bytes());
    }

    #[test]
    fn test_for_names_rejects_unknown() {
        assert!(matches!(
            Translator::for_names("UTF-8", "EBCDIC-klingon"),
            Err(Error::UnknownCharset { name }) if name == "EBCDIC-klingon"
        ));
    }

    #[test]
    fn test_encoder_convert_string() {
        let mut encoder = crate::new_encoder("windows-1252").unwrap();
        assert_eq!(encoder.convert_string("€5 ™"), b"\x805 \x99");
    }

    /// Feed `input` in pieces, carrying unconsumed bytes forward
    fn translate_in_pieces(charset: &str, input: &[u8], cuts: &[usize]) -> Vec<u8> {
        let mut decoder = new_decoder(charset).unwrap();
        let mut pending = Vec::new();
        let mut output = Vec::new();
        let mut start = 0;
        for &cut in cuts.iter().chain(std::iter::once(&input.len())) {
            let end = cut.clamp(start, input.len());
            pending.extend_from_slice(&input[start..end]);
            start = end;
            let last = end == input.len();
            let translation = decoder.translate(&pending, last);
            output.extend_from_slice(&translation.output);
            pending.drain(..translation.consumed);
        }
        output
    }

    proptest! {
        #[test]
        fn prop_chunking_does_not_change_utf8_output(
            text in "\\PC{0,40}",
            mut cuts in proptest::collection::vec(0usize..200, 0..6),
        ) {
            cuts.sort_unstable();
            let whole = translate_in_pieces("UTF-8", text.as_bytes(), &[]);
            let pieces = translate_in_pieces("UTF-8", text.as_bytes(), &cuts);
            prop_assert_eq!(&pieces, &whole);
            prop_assert_eq!(pieces, text.into_bytes());
        }

        #[test]
        fn prop_chunking_does_not_change_shift_jis_output(
            bytes in proptest::collection::vec(any::<u8>(), 0..64),
            mut cuts in proptest::collection::vec(0usize..64, 0..6),
        ) {
            cuts.sort_unstable();
            let whole = translate_in_pieces("Shift_JIS", &bytes, &[]);
            let pieces = translate_in_pieces("Shift_JIS", &bytes, &cuts);
            prop_assert_eq!(pieces, whole);
        }

        #[test]
        fn prop_chunking_does_not_change_utf16_output(
            bytes in proptest::collection::vec(any::<u8>(), 0..64),
            mut cuts in proptest::collection::vec(0usize..64, 0..6),
        ) {
            cuts.sort_unstable();
            let whole = translate_in_pieces("UTF-16", &bytes, &[]);
            let pieces = translate_in_pieces("UTF-16", &bytes, &cuts);
            prop_assert_eq!(pieces, whole);
        }
    }
}
