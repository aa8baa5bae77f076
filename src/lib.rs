//! # textcodec - Streaming Character Set Conversion
//!
//! Converts byte streams between legacy text encodings and Unicode through a
//! single per-character contract shared by every codec.
//!
//! ## Features
//!
//! - **One decode/encode primitive** that reports success, invalid input,
//!   "need more bytes" and "state advanced, no output" for every codec
//! - **Name-based charset registry** with IANA aliases and forgiving matching
//! - **Batch conversion** with an aggregate success flag
//! - **Streaming adapters** implementing `std::io::Read` and `std::io::Write`
//!   that survive arbitrary chunk boundaries
//! - **Fallback chains** and an **HTML entity decoder** built on the same contract
//!
//! ## Quick Start
//!
//! ```rust
//! use textcodec::DecoderExt;
//!
//! let mut decoder = textcodec::new_decoder("Shift_JIS").unwrap();
//! let text = decoder.convert_string(b"\x8a\xbf\x8e\x9a");
//! assert_eq!(text, "漢字");
//!
//! let latin1 = textcodec::convert_string("UTF-8", "ISO-8859-1", "é".as_bytes()).unwrap();
//! assert_eq!(latin1, b"\xE9");
//! ```

#![deny(missing_docs)]

use serde::Serialize;

pub mod codecs;
mod entity;
mod fallback;
pub mod registry;
mod stream;
mod tables;
mod translate;

pub use entity::{EntityDecoder, entity_decoder};
pub use fallback::{FallbackDecoder, fallback};
pub use registry::{Charset, CharsetInfo, Registry, lookup, new_decoder, new_encoder, registry};
pub use stream::{DEFAULT_BUFFER_SIZE, DecodingReader, EncodingWriter};
pub use translate::{DecoderExt, EncoderExt, Translation, Translator, convert_string};

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the fallible conversion entry points
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No charset is registered under this name
    #[error("unknown charset: {name}")]
    UnknownCharset {
        /// The name as given by the caller
        name: String,
    },
    /// Input bytes do not form a character in the source charset
    #[error("invalid byte sequence at position {position}")]
    InvalidSequence {
        /// Byte offset of the offending sequence in the input
        position: usize,
    },
    /// Character has no representation in the target charset
    #[error("cannot encode character {character:?} at position {position}")]
    Unmappable {
        /// The character that could not be encoded
        character: char,
        /// Byte offset of the character's source sequence in the input
        position: usize,
    },
    /// Input ended in the middle of a character
    #[error("input truncated inside a character at position {position}")]
    Truncated {
        /// Byte offset where the incomplete sequence starts
        position: usize,
    },
    /// I/O failure from an underlying source or sink
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The code point reported for bytes that do not form a valid character
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Scratch space drivers hand to an encoder for a single call.
///
/// Holds a byte-order mark plus the longest character of every built-in codec.
pub const MAX_CHAR_LEN: usize = 8;

/// Outcome of one decode or encode step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Exactly one character was converted
    Success,
    /// The input has no valid conversion; a substitute was produced
    InvalidChar,
    /// The buffer is too short; nothing was consumed or written
    NoRoom,
    /// Internal state advanced (e.g. a byte-order mark) without a character
    StateOnly,
}

/// Result of decoding one character from the front of a byte buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded character; meaningless for `NoRoom` and `StateOnly`
    pub code_point: char,
    /// Bytes consumed from the front of the buffer
    pub consumed: usize,
    /// Outcome of the step
    pub status: Status,
}

impl Decoded {
    /// Not enough bytes to decide; retry with the same bytes plus more
    pub const NO_ROOM: Decoded = Decoded {
        code_point: '\0',
        consumed: 0,
        status: Status::NoRoom,
    };

    /// A character decoded from `consumed` bytes
    #[inline]
    pub const fn success(code_point: char, consumed: usize) -> Self {
        Self {
            code_point,
            consumed,
            status: Status::Success,
        }
    }

    /// `consumed` bytes proven not to start a valid character
    #[inline]
    pub const fn invalid(consumed: usize) -> Self {
        Self {
            code_point: REPLACEMENT_CHARACTER,
            consumed,
            status: Status::InvalidChar,
        }
    }

    /// `consumed` bytes absorbed into decoder state, no character produced
    #[inline]
    pub const fn state_only(consumed: usize) -> Self {
        Self {
            code_point: '\0',
            consumed,
            status: Status::StateOnly,
        }
    }
}

/// Result of encoding one character into the front of an output buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    /// Bytes written to the front of the buffer
    pub written: usize,
    /// Outcome of the step
    pub status: Status,
}

impl Encoded {
    /// The buffer cannot hold the encoded form; nothing was written
    pub const NO_ROOM: Encoded = Encoded {
        written: 0,
        status: Status::NoRoom,
    };

    /// The character was encoded into `written` bytes
    #[inline]
    pub const fn success(written: usize) -> Self {
        Self {
            written,
            status: Status::Success,
        }
    }

    /// The character is unrepresentable; `written` substitute bytes were emitted
    #[inline]
    pub const fn invalid(written: usize) -> Self {
        Self {
            written,
            status: Status::InvalidChar,
        }
    }

    /// Header bytes were written without consuming the character
    #[inline]
    pub const fn state_only(written: usize) -> Self {
        Self {
            written,
            status: Status::StateOnly,
        }
    }
}

/// Per-stream decoding state for one charset.
///
/// Each call looks at the front of `input` and decodes at most one character.
/// Implementations never read past the end of `input` and report `NoRoom`
/// (consuming nothing) whenever the bytes present cannot settle the next
/// character.
pub trait Decoder: Send {
    /// Decode one character from the front of `input`
    fn decode(&mut self, input: &[u8]) -> Decoded;

    /// Decode from the final bytes of a stream.
    ///
    /// Drivers call this only after [`decode`](Decoder::decode) reported
    /// `NoRoom` and no further input will arrive.
    fn decode_last(&mut self, input: &[u8]) -> Decoded {
        self.decode(input)
    }
}

/// Per-stream encoding state for one charset
pub trait Encoder: Send {
    /// Encode `c` into the front of `output`.
    ///
    /// A `StateOnly` result means header bytes were written and `c` must be
    /// offered again.
    fn encode(&mut self, output: &mut [u8], c: char) -> Encoded;
}

impl<T: Decoder + ?Sized> Decoder for Box<T> {
    fn decode(&mut self, input: &[u8]) -> Decoded {
        (**self).decode(input)
    }

    fn decode_last(&mut self, input: &[u8]) -> Decoded {
        (**self).decode_last(input)
    }
}

impl<T: Decoder + ?Sized> Decoder for &mut T {
    fn decode(&mut self, input: &[u8]) -> Decoded {
        (**self).decode(input)
    }

    fn decode_last(&mut self, input: &[u8]) -> Decoded {
        (**self).decode_last(input)
    }
}

impl<T: Encoder + ?Sized> Encoder for Box<T> {
    fn encode(&mut self, output: &mut [u8], c: char) -> Encoded {
        (**self).encode(output, c)
    }
}

impl<T: Encoder + ?Sized> Encoder for &mut T {
    fn encode(&mut self, output: &mut [u8], c: char) -> Encoded {
        (**self).encode(output, c)
    }
}

/// Push `c` through `encoder`, appending the bytes to `out`.
///
/// Returns `false` when the encoder had to substitute.
pub(crate) fn encode_into<E: Encoder + ?Sized>(
    encoder: &mut E,
    c: char,
    out: &mut Vec<u8>,
) -> bool {
    let mut scratch = [0u8; MAX_CHAR_LEN];
    loop {
        let encoded = encoder.encode(&mut scratch, c);
        out.extend_from_slice(&scratch[..encoded.written.min(MAX_CHAR_LEN)]);
        match encoded.status {
            Status::Success => return true,
            Status::StateOnly => continue,
            Status::InvalidChar => return false,
            Status::NoRoom => {
                out.push(b'?');
                return false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    /// (UTF-8 text, encoded bytes, charset name)
    const CONFORMANCE: &[(&str, &[u8], &str)] = &[
        ("Résumé", "Résumé".as_bytes(), "utf8"),
        ("Résumé", b"R\xe9sum\xe9", "latin-1"),
        ("これは漢字です。", b"S0\x8c0o0\"oW[g0Y0\x020", "UTF-16LE"),
        ("これは漢字です。", b"0S0\x8c0oo\"[W0g0Y0\x02", "UTF-16BE"),
        ("これは漢字です。", b"\xfe\xff0S0\x8c0oo\"[W0g0Y0\x02", "UTF-16"),
        (
            "𝄢𝄞𝄪𝄫",
            b"\xfe\xff\xd8\x34\xdd\x22\xd8\x34\xdd\x1e\xd8\x34\xdd\x2a\xd8\x34\xdd\x2b",
            "UTF-16",
        ),
        ("Hello, world", b"Hello, world", "ASCII"),
        ("Gdańsk", b"Gda\xf1sk", "ISO-8859-2"),
        (
            "Ââ Čč Đđ Ŋŋ Õõ Šš Žž Åå Ää",
            b"\xc2\xe2 \xc8\xe8 \xa9\xb9 \xaf\xbf \xd5\xf5 \xaa\xba \xac\xbc \xc5\xe5 \xc4\xe4",
            "ISO-8859-10",
        ),
        ("สำหรับ", b"\xca\xd3\xcb\xc3\xd1\xba", "ISO-8859-11"),
        ("latviešu", b"latvie\xf0u", "ISO-8859-13"),
        ("Seònaid", b"Se\xf2naid", "ISO-8859-14"),
        ("€1 is cheap", b"\xa41 is cheap", "ISO-8859-15"),
        ("românește", b"rom\xe2ne\xbate", "ISO-8859-16"),
        ("nutraĵo", b"nutra\xbco", "ISO-8859-3"),
        ("Kalâdlit", b"Kal\xe2dlit", "ISO-8859-4"),
        ("русский", b"\xe0\xe3\xe1\xe1\xda\xd8\xd9", "ISO-8859-5"),
        ("ελληνικά", b"\xe5\xeb\xeb\xe7\xed\xe9\xea\xdc", "ISO-8859-7"),
        ("Kağan", b"Ka\xf0an", "ISO-8859-9"),
        ("Résumé", b"R\x8esum\x8e", "macintosh"),
        ("Gdańsk", b"Gda\xf1sk", "windows-1250"),
        ("русский", b"\xf0\xf3\xf1\xf1\xea\xe8\xe9", "windows-1251"),
        ("Résumé", b"R\xe9sum\xe9", "windows-1252"),
        ("ελληνικά", b"\xe5\xeb\xeb\xe7\xed\xe9\xea\xdc", "windows-1253"),
        ("Kağan", b"Ka\xf0an", "windows-1254"),
        ("עִבְרִית", b"\xf2\xc4\xe1\xc0\xf8\xc4\xe9\xfa", "windows-1255"),
        ("العربية", b"\xc7\xe1\xda\xd1\xc8\xed\xc9", "windows-1256"),
        ("latviešu", b"latvie\xf0u", "windows-1257"),
        ("Vi\u{EA}\u{323}t", b"Vi\xea\xf2t", "windows-1258"),
        ("สำหรับ", b"\xca\xd3\xcb\xc3\xd1\xba", "windows-874"),
        ("русский", b"\xd2\xd5\xd3\xd3\xcb\xc9\xca", "KOI8-R"),
        ("українська", b"\xd5\xcb\xd2\xc1\xa7\xce\xd3\xd8\xcb\xc1", "KOI8-U"),
        (
            "これは漢字です。",
            b"\x82\xb1\x82\xea\x82\xcd\x8a\xbf\x8e\x9a\x82\xc5\x82\xb7\x81B",
            "SJIS",
        ),
        (
            "これは漢字です。",
            b"\xa4\xb3\xa4\xec\xa4\xcf\xb4\xc1\xbb\xfa\xa4\xc7\xa4\xb9\xa1\xa3",
            "EUC-JP",
        ),
        ("HELLO", b"\xc8\xc5\xd3\xd3\xd6", "IBM037"),
    ];

    #[test]
    fn test_decode_conformance() {
        for &(text, encoded, charset) in CONFORMANCE {
            let mut decoder = new_decoder(charset).unwrap();
            assert_eq!(decoder.convert_string(encoded), text, "decoding {charset}");
        }
    }

    #[test]
    fn test_translate_conformance() {
        for &(text, encoded, charset) in CONFORMANCE {
            let mut decoder = new_decoder(charset).unwrap();
            let translation = decoder.translate(encoded, true);
            assert!(translation.success, "translating {charset}");
            assert_eq!(translation.consumed, encoded.len());
            assert_eq!(translation.output, text.as_bytes());
        }
    }

    #[test]
    fn test_encode_conformance() {
        for &(text, encoded, charset) in CONFORMANCE {
            let mut encoder = new_encoder(charset).unwrap();
            assert_eq!(encoder.convert_string(text), encoded, "encoding {charset}");
        }
    }

    #[test]
    fn test_reader_conformance() {
        for &(text, encoded, charset) in CONFORMANCE {
            let decoder = new_decoder(charset).unwrap();
            let mut reader = DecodingReader::new(encoded, decoder);
            let mut result = String::new();
            reader.read_to_string(&mut result).unwrap();
            assert_eq!(result, text, "reading {charset}");
        }
    }

    #[test]
    fn test_writer_conformance() {
        for &(text, encoded, charset) in CONFORMANCE {
            let encoder = new_encoder(charset).unwrap();
            let mut writer = EncodingWriter::new(Vec::new(), encoder);
            writer.write_all(text.as_bytes()).unwrap();
            let output = writer.finish().unwrap();
            assert_eq!(output, encoded, "writing {charset}");
        }
    }

    #[test]
    fn test_latin1_single_byte() {
        let mut decoder = new_decoder("ISO-8859-1").unwrap();
        let decoded = decoder.decode(&[0xE9]);
        assert_eq!(decoded, Decoded::success('é', 1));

        let mut encoder = new_encoder("ISO-8859-1").unwrap();
        let mut buf = [0u8; 4];
        assert_eq!(encoder.encode(&mut buf, 'é'), Encoded::success(1));
        assert_eq!(buf[0], 0xE9);
    }

    #[test]
    fn test_unknown_charset_is_absent() {
        assert!(new_decoder("no-such-charset").is_none());
        assert!(new_encoder("no-such-charset").is_none());
        assert!(matches!(
            convert_string("no-such-charset", "UTF-8", b"abc"),
            Err(Error::UnknownCharset { .. })
        ));
    }

    #[test]
    fn test_encode_into_substitutes_on_no_room() {
        struct Stubborn;
        impl Encoder for Stubborn {
            fn encode(&mut self, _output: &mut [u8], _c: char) -> Encoded {
                Encoded::NO_ROOM
            }
        }

        let mut out = Vec::new();
        assert!(!encode_into(&mut Stubborn, 'x', &mut out));
        assert_eq!(out, b"?");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&Status::InvalidChar).unwrap();
        assert_eq!(json, "\"invalid_char\"");
    }
}
