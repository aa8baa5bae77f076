//! `std::io` adapters that convert while bytes flow through

use std::io::{self, Read, Write};

use crate::codecs::utf8::{Utf8Decoder, Utf8Encoder};
use crate::{Decoder, Encoder, MAX_CHAR_LEN, REPLACEMENT_CHARACTER, Status, encode_into};

/// Initial size of the undecoded-byte buffer held by a [`DecodingReader`]
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Reads bytes in some charset from `R` and yields them as UTF-8.
///
/// Characters split across reads of the source are retained until the rest
/// arrives. When the source runs dry, whatever cannot be decoded comes out as
/// U+FFFD.
#[derive(Debug)]
pub struct DecodingReader<R, D> {
    source: R,
    decoder: D,
    /// Source bytes; `buf[start..end]` has not been decoded yet
    buf: Vec<u8>,
    start: usize,
    end: usize,
    /// Decoded UTF-8 not yet handed out
    decoded: Vec<u8>,
    handed_out: usize,
    eof: bool,
    clean: bool,
}

impl<R: Read, D: Decoder> DecodingReader<R, D> {
    /// Wrap `source`, decoding with `decoder`
    pub fn new(source: R, decoder: D) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, source, decoder)
    }

    /// Wrap `source` with an undecoded-byte buffer of `capacity` bytes.
    ///
    /// The buffer grows if a single character needs more room.
    pub fn with_capacity(capacity: usize, source: R, decoder: D) -> Self {
        Self {
            source,
            decoder,
            buf: vec![0; capacity.max(MAX_CHAR_LEN)],
            start: 0,
            end: 0,
            decoded: Vec::new(),
            handed_out: 0,
            eof: false,
            clean: true,
        }
    }

    /// `true` until a character had to be replaced with U+FFFD
    pub fn is_clean(&self) -> bool {
        self.clean
    }

    /// The wrapped source
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Unwrap the source; bytes already pulled from it are discarded
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Decode the retained bytes into `self.decoded`
    fn decode_retained(&mut self) {
        let last = self.eof;
        while self.start < self.end {
            let rest = &self.buf[self.start..self.end];
            let mut decoded = self.decoder.decode(rest);
            if decoded.status == Status::NoRoom && last {
                decoded = self.decoder.decode_last(rest);
            }

            match decoded.status {
                Status::Success => {
                    encode_into(&mut Utf8Encoder, decoded.code_point, &mut self.decoded);
                    self.start += decoded.consumed;
                }
                Status::InvalidChar => {
                    self.substitute();
                    self.start += decoded.consumed.max(1);
                }
                Status::StateOnly => self.start += decoded.consumed,
                Status::NoRoom => {
                    if last {
                        self.substitute();
                        self.start = self.end;
                    }
                    break;
                }
            }
        }
        self.start = self.start.min(self.end);
    }

    fn substitute(&mut self) {
        self.clean = false;
        encode_into(&mut Utf8Encoder, REPLACEMENT_CHARACTER, &mut self.decoded);
    }

    /// Pull more bytes from the source behind the retained tail
    fn fill(&mut self) -> io::Result<()> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        if self.end == self.buf.len() {
            let grown = self.buf.len() * 2;
            tracing::trace!(from = self.buf.len(), to = grown, "growing decode buffer");
            self.buf.resize(grown, 0);
        }

        let read = self.source.read(&mut self.buf[self.end..])?;
        if read == 0 {
            self.eof = true;
        } else {
            self.end += read;
        }
        Ok(())
    }
}

impl<R: Read, D: Decoder> Read for DecodingReader<R, D> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if out.is_empty() {
            return Ok(0);
        }

        loop {
            if self.handed_out < self.decoded.len() {
                let ready = &self.decoded[self.handed_out..];
                let n = ready.len().min(out.len());
                out[..n].copy_from_slice(&ready[..n]);
                self.handed_out += n;
                return Ok(n);
            }
            self.decoded.clear();
            self.handed_out = 0;

            self.decode_retained();
            if !self.decoded.is_empty() {
                continue;
            }
            if self.eof && self.start == self.end {
                return Ok(0);
            }
            self.fill()?;
        }
    }
}

/// Takes UTF-8 and writes it to `W` in some charset.
///
/// A UTF-8 sequence split across writes is held until it completes.
/// Call [`finish`](EncodingWriter::finish) at the end; dropping the writer
/// loses a held partial sequence.
#[derive(Debug)]
pub struct EncodingWriter<W, E> {
    sink: W,
    encoder: E,
    /// Start of a UTF-8 sequence cut off by the end of the last write
    partial: Vec<u8>,
    encoded: Vec<u8>,
    clean: bool,
}

impl<W: Write, E: Encoder> EncodingWriter<W, E> {
    /// Wrap `sink`, encoding with `encoder`
    pub fn new(sink: W, encoder: E) -> Self {
        Self {
            sink,
            encoder,
            partial: Vec::with_capacity(MAX_CHAR_LEN),
            encoded: Vec::new(),
            clean: true,
        }
    }

    /// `true` until the encoder had to substitute for a character
    pub fn is_clean(&self) -> bool {
        self.clean
    }

    /// The wrapped sink
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Write out a held partial sequence as one substitution, flush, and
    /// return the sink
    pub fn finish(mut self) -> io::Result<W> {
        if !self.partial.is_empty() {
            self.partial.clear();
            self.push_char(REPLACEMENT_CHARACTER, false);
        }
        self.drain()?;
        self.sink.flush()?;
        Ok(self.sink)
    }

    fn push_char(&mut self, c: char, valid: bool) {
        let mapped = encode_into(&mut self.encoder, c, &mut self.encoded);
        self.clean &= valid && mapped;
    }

    fn encode(&mut self, input: &[u8]) {
        let mut pos = 0;
        while pos < input.len() {
            let decoded = Utf8Decoder.decode(&input[pos..]);
            match decoded.status {
                Status::Success => {
                    self.push_char(decoded.code_point, true);
                    pos += decoded.consumed;
                }
                Status::InvalidChar => {
                    self.push_char(REPLACEMENT_CHARACTER, false);
                    pos += decoded.consumed.max(1);
                }
                Status::StateOnly => pos += decoded.consumed,
                Status::NoRoom => {
                    self.partial.extend_from_slice(&input[pos..]);
                    break;
                }
            }
        }
    }

    fn drain(&mut self) -> io::Result<()> {
        if !self.encoded.is_empty() {
            self.sink.write_all(&self.encoded)?;
            self.encoded.clear();
        }
        Ok(())
    }
}

impl<W: Write, E: Encoder> Write for EncodingWriter<W, E> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.drain()?;

        if self.partial.is_empty() {
            self.encode(buf);
        } else {
            let mut joined = std::mem::take(&mut self.partial);
            joined.extend_from_slice(buf);
            self.encode(&joined);
        }

        self.drain()?;
        Ok(buf.len())
    }

    /// Flush encoded output; a held partial sequence stays held
    fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecoderExt, EntityDecoder, FallbackDecoder, fallback, new_decoder, new_encoder};
    use proptest::prelude::*;

    /// Hands out at most `step` bytes per read
    struct Trickle<'a> {
        bytes: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(out.len()).min(self.bytes.len());
            out[..n].copy_from_slice(&self.bytes[..n]);
            self.bytes = &self.bytes[n..];
            Ok(n)
        }
    }

    fn read_all<R: Read>(mut reader: R) -> String {
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        text
    }

    /// Read `bytes` through `decoder`, `step` bytes at a time
    fn trickle_through<D: Decoder>(
        bytes: &[u8],
        step: usize,
        capacity: usize,
        decoder: D,
    ) -> String {
        let source = Trickle { bytes, step };
        read_all(DecodingReader::with_capacity(capacity, source, decoder))
    }

    fn chain(entities: bool, names: &[&str]) -> FallbackDecoder {
        let mut decoders: Vec<Box<dyn Decoder>> = Vec::new();
        if entities {
            decoders.push(Box::new(EntityDecoder::new()));
        }
        decoders.extend(names.iter().map(|name| new_decoder(name).unwrap()));
        fallback(decoders)
    }

    #[test]
    fn test_reader_one_byte_at_a_time() {
        let sjis = b"\x82\xb1\x82\xea\x82\xcd\x8a\xbf\x8e\x9a";
        let source = Trickle { bytes: sjis, step: 1 };
        let reader = DecodingReader::with_capacity(1, source, new_decoder("Shift_JIS").unwrap());
        assert_eq!(read_all(reader), "これは漢字");
    }

    #[test]
    fn test_reader_grows_for_long_references() {
        let text = "&CounterClockwiseContourIntegral; done";
        let source = Trickle { bytes: text.as_bytes(), step: 3 };
        let reader = DecodingReader::with_capacity(2, source, EntityDecoder::new());
        assert_eq!(read_all(reader), "\u{2233} done");
    }

    #[test]
    fn test_reader_long_numeric_reference() {
        let text = format!("&#{}65; x", "0".repeat(45));
        assert_eq!(trickle_through(text.as_bytes(), 1, 1, EntityDecoder::new()), "A x");
        assert_eq!(trickle_through(text.as_bytes(), 7, 4, EntityDecoder::new()), "A x");
    }

    #[test]
    fn test_reader_fallback_chain_one_byte_at_a_time() {
        let mixed = b"r\xc3\xa9sum\xe9 &eacute; \xe6\xbc\xa2\xe9";
        let decoded = trickle_through(mixed, 1, 1, chain(false, &["UTF-8", "ISO-8859-1"]));
        assert_eq!(decoded, "résumé &eacute; 漢é");
    }

    #[test]
    fn test_reader_replaces_truncated_tail() {
        let mut reader = DecodingReader::new(&b"ok\xe6\xbc"[..], new_decoder("UTF-8").unwrap());
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!(text, "ok\u{FFFD}");
        assert!(!reader.is_clean());
    }

    #[test]
    fn test_reader_replaces_invalid_bytes() {
        let mut reader = DecodingReader::new(&b"a\x80b"[..], new_decoder("Shift_JIS").unwrap());
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!(text, "a\u{FFFD}b");
        assert!(!reader.is_clean());
    }

    #[test]
    fn test_reader_small_output_buffer() {
        let mut reader = DecodingReader::new(&b"\xe9t\xe9"[..], new_decoder("latin1").unwrap());
        let mut out = [0u8; 1];
        let mut collected = Vec::new();
        loop {
            match reader.read(&mut out).unwrap() {
                0 => break,
                n => collected.extend_from_slice(&out[..n]),
            }
        }
        assert_eq!(collected, "été".as_bytes());
        assert!(reader.is_clean());
        assert_eq!(reader.read(&mut []).unwrap(), 0);
    }

    #[test]
    fn test_reader_into_inner() {
        let source = io::Cursor::new(b"abc".to_vec());
        let mut reader = DecodingReader::new(source, new_decoder("UTF-8").unwrap());
        assert_eq!(read_all(&mut reader), "abc");
        assert_eq!(reader.get_ref().position(), 3);
        assert_eq!(reader.into_inner().into_inner(), b"abc");
    }

    #[test]
    fn test_writer_holds_split_sequence() {
        let mut writer = EncodingWriter::new(Vec::new(), new_encoder("UTF-16BE").unwrap());
        let bytes = "a漢".as_bytes();
        writer.write_all(&bytes[..2]).unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.get_ref(), b"\x00a");

        writer.write_all(&bytes[2..]).unwrap();
        assert_eq!(writer.get_ref(), b"\x00a\x6f\x22");
        assert!(writer.is_clean());
    }

    #[test]
    fn test_writer_finish_substitutes_partial() {
        let mut writer = EncodingWriter::new(Vec::new(), new_encoder("UTF-8").unwrap());
        writer.write_all(b"x\xe6\xbc").unwrap();
        assert!(writer.is_clean());
        assert_eq!(writer.finish().unwrap(), "x\u{FFFD}".as_bytes());
    }

    #[test]
    fn test_writer_unmappable_marks_unclean() {
        let mut writer = EncodingWriter::new(Vec::new(), new_encoder("ISO-8859-1").unwrap());
        write!(writer, "caf\u{e9} \u{2603}").unwrap();
        assert!(!writer.is_clean());
        assert_eq!(writer.finish().unwrap(), b"caf\xe9 ?");
    }

    #[test]
    fn test_writer_invalid_utf8_input() {
        let mut writer = EncodingWriter::new(Vec::new(), new_encoder("UTF-8").unwrap());
        writer.write_all(b"a\xffb").unwrap();
        assert!(!writer.is_clean());
        assert_eq!(writer.finish().unwrap(), "a\u{FFFD}b".as_bytes());
    }

    proptest! {
        #[test]
        fn prop_reader_matches_batch(
            bytes in proptest::collection::vec(any::<u8>(), 0..96),
            step in 1usize..9,
            capacity in 1usize..16,
        ) {
            // the batch path drops a truncated tail where the reader substitutes
            let expected = {
                let mut decoder = new_decoder("Shift_JIS").unwrap();
                let complete = decoder.translate(&bytes, false).consumed;
                let mut text = decoder.convert_string(&bytes[..complete]);
                if complete < bytes.len() {
                    text.push(REPLACEMENT_CHARACTER);
                }
                text
            };
            let decoder = new_decoder("Shift_JIS").unwrap();
            let decoded = trickle_through(&bytes, step, capacity, decoder);
            prop_assert_eq!(decoded, expected);
        }

        #[test]
        fn prop_fallback_reader_matches_batch(
            bytes in proptest::collection::vec(any::<u8>(), 0..96),
            step in 1usize..9,
            capacity in 1usize..16,
        ) {
            let names = ["UTF-8", "ISO-8859-1"];
            let expected = chain(false, &names).convert_string(&bytes);
            let decoded = trickle_through(&bytes, step, capacity, chain(false, &names));
            prop_assert_eq!(decoded, expected);
        }

        #[test]
        fn prop_stateful_member_in_chain(
            bytes in proptest::collection::vec(any::<u8>(), 0..96),
            step in 1usize..9,
            capacity in 1usize..16,
        ) {
            let names = ["UTF-16", "ISO-8859-1"];
            let expected = chain(false, &names).convert_string(&bytes);
            let decoded = trickle_through(&bytes, step, capacity, chain(false, &names));
            prop_assert_eq!(decoded, expected);
        }

        #[test]
        fn prop_entity_chain_reader_matches_batch(
            text in "(&|#|x|X|0|6|5|;|amp|not|in|nLt|\\xe9| |é){0,40}",
            step in 1usize..9,
            capacity in 1usize..16,
        ) {
            let names = ["UTF-8", "ISO-8859-1"];
            let expected = chain(true, &names).convert_string(text.as_bytes());
            let decoded = trickle_through(text.as_bytes(), step, capacity, chain(true, &names));
            prop_assert_eq!(decoded, expected);
        }

        #[test]
        fn prop_writer_split_anywhere(text in "\\PC{0,32}", cut in 0usize..128) {
            let bytes = text.as_bytes();
            let cut = cut.min(bytes.len());
            let mut writer = EncodingWriter::new(Vec::new(), new_encoder("UTF-16LE").unwrap());
            writer.write_all(&bytes[..cut]).unwrap();
            writer.write_all(&bytes[cut..]).unwrap();
            let expected: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
            prop_assert_eq!(writer.finish().unwrap(), expected);
        }
    }
}
