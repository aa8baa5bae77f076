//! Table-driven single-byte code pages
//!
//! One decoder and one encoder serve every code page; a [`CodePage`] only
//! supplies the byte-to-code-point table. Reverse maps for encoding are built
//! the first time a code page encodes something.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::registry::{Charset, Registry};
use crate::tables::code_pages as tables;
use crate::{Decoded, Decoder, Encoded, Encoder};

/// Marks a byte with no assigned character
const UNMAPPED: u16 = 0xFFFD;

enum Layout {
    /// 7-bit only
    Ascii,
    /// Every byte is its own code point
    Latin1,
    /// ASCII below 0x80, table above
    AsciiCompatible(&'static [u16; 128]),
    /// Table for every byte (EBCDIC)
    Full(&'static [u16; 256]),
}

/// A single-byte charset
pub struct CodePage {
    name: &'static str,
    aliases: &'static [&'static str],
    layout: Layout,
    reverse: OnceLock<HashMap<char, u8>>,
}

impl CodePage {
    const fn new(name: &'static str, aliases: &'static [&'static str], layout: Layout) -> Self {
        Self {
            name,
            aliases,
            layout,
            reverse: OnceLock::new(),
        }
    }

    /// Canonical name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Character assigned to `byte`, if any
    pub fn code_point(&self, byte: u8) -> Option<char> {
        let value = match self.layout {
            Layout::Ascii if byte >= 0x80 => return None,
            Layout::Ascii | Layout::Latin1 => u16::from(byte),
            Layout::AsciiCompatible(_) if byte < 0x80 => u16::from(byte),
            Layout::AsciiCompatible(upper) => upper[usize::from(byte - 0x80)],
            Layout::Full(table) => table[usize::from(byte)],
        };
        if value == UNMAPPED {
            return None;
        }
        char::from_u32(u32::from(value))
    }

    /// Byte that encodes `c`, if any
    pub fn byte_for(&self, c: char) -> Option<u8> {
        let value = u32::from(c);
        match self.layout {
            Layout::Ascii => u8::try_from(value).ok().filter(|b| b.is_ascii()),
            Layout::Latin1 => u8::try_from(value).ok(),
            Layout::AsciiCompatible(_) if value < 0x80 => Some(value as u8),
            Layout::AsciiCompatible(_) | Layout::Full(_) => self.reverse().get(&c).copied(),
        }
    }

    fn reverse(&self) -> &HashMap<char, u8> {
        self.reverse.get_or_init(|| {
            let mut reverse = HashMap::with_capacity(256);
            for byte in 0..=u8::MAX {
                if let Some(c) = self.code_point(byte) {
                    reverse.entry(c).or_insert(byte);
                }
            }
            tracing::debug!(code_page = self.name, entries = reverse.len(), "built reverse map");
            reverse
        })
    }
}

impl fmt::Debug for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodePage").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Decodes one byte at a time through a [`CodePage`]
#[derive(Debug, Clone, Copy)]
pub struct SingleByteDecoder {
    page: &'static CodePage,
}

impl SingleByteDecoder {
    /// Decoder for `page`
    pub fn new(page: &'static CodePage) -> Self {
        Self { page }
    }
}

impl Decoder for SingleByteDecoder {
    fn decode(&mut self, input: &[u8]) -> Decoded {
        let Some(&byte) = input.first() else {
            return Decoded::NO_ROOM;
        };
        match self.page.code_point(byte) {
            Some(c) => Decoded::success(c, 1),
            None => Decoded::invalid(1),
        }
    }
}

/// Encodes through a [`CodePage`], writing `?` for characters it lacks
#[derive(Debug, Clone, Copy)]
pub struct SingleByteEncoder {
    page: &'static CodePage,
}

impl SingleByteEncoder {
    /// Encoder for `page`
    pub fn new(page: &'static CodePage) -> Self {
        Self { page }
    }
}

impl Encoder for SingleByteEncoder {
    fn encode(&mut self, output: &mut [u8], c: char) -> Encoded {
        let Some(slot) = output.first_mut() else {
            return Encoded::NO_ROOM;
        };
        match self.page.byte_for(c) {
            Some(byte) => {
                *slot = byte;
                Encoded::success(1)
            }
            None => {
                *slot = b'?';
                Encoded::invalid(1)
            }
        }
    }
}

/// Every built-in single-byte code page, in registration order
pub fn code_pages() -> &'static [CodePage] {
    &CODE_PAGES
}

pub(crate) fn register(registry: &mut Registry) {
    for page in code_pages() {
        registry.register(Charset::new(
            page.name,
            page.aliases,
            move || Box::new(SingleByteDecoder::new(page)),
            move || Box::new(SingleByteEncoder::new(page)),
        ));
    }
}

static CODE_PAGES: [CodePage; 34] = [
    CodePage::new(
        "US-ASCII",
        &[
            "ASCII",
            "iso-ir-6",
            "ANSI_X3.4-1968",
            "ANSI_X3.4-1986",
            "ISO_646.irv:1991",
            "ISO646-US",
            "us",
            "IBM367",
            "cp367",
            "csASCII",
        ],
        Layout::Ascii,
    ),
    CodePage::new(
        "ISO-8859-1",
        &[
            "ISO_8859-1:1987",
            "iso-ir-100",
            "ISO_8859-1",
            "latin1",
            "l1",
            "IBM819",
            "CP819",
            "csISOLatin1",
        ],
        Layout::Latin1,
    ),
    CodePage::new(
        "ISO-8859-2",
        &["ISO_8859-2:1987", "iso-ir-101", "ISO_8859-2", "latin2", "l2", "csISOLatin2"],
        Layout::AsciiCompatible(&tables::ISO_8859_2),
    ),
    CodePage::new(
        "ISO-8859-3",
        &["ISO_8859-3:1988", "iso-ir-109", "ISO_8859-3", "latin3", "l3", "csISOLatin3"],
        Layout::AsciiCompatible(&tables::ISO_8859_3),
    ),
    CodePage::new(
        "ISO-8859-4",
        &["ISO_8859-4:1988", "iso-ir-110", "ISO_8859-4", "latin4", "l4", "csISOLatin4"],
        Layout::AsciiCompatible(&tables::ISO_8859_4),
    ),
    CodePage::new(
        "ISO-8859-5",
        &["ISO_8859-5:1988", "iso-ir-144", "ISO_8859-5", "cyrillic", "csISOLatinCyrillic"],
        Layout::AsciiCompatible(&tables::ISO_8859_5),
    ),
    CodePage::new(
        "ISO-8859-6",
        &[
            "ISO_8859-6:1987",
            "iso-ir-127",
            "ISO_8859-6",
            "ECMA-114",
            "ASMO-708",
            "arabic",
            "csISOLatinArabic",
        ],
        Layout::AsciiCompatible(&tables::ISO_8859_6),
    ),
    CodePage::new(
        "ISO-8859-7",
        &[
            "ISO_8859-7:1987",
            "iso-ir-126",
            "ISO_8859-7",
            "ELOT_928",
            "ECMA-118",
            "greek",
            "greek8",
            "csISOLatinGreek",
        ],
        Layout::AsciiCompatible(&tables::ISO_8859_7),
    ),
    CodePage::new(
        "ISO-8859-8",
        &["ISO_8859-8:1988", "iso-ir-138", "ISO_8859-8", "hebrew", "csISOLatinHebrew"],
        Layout::AsciiCompatible(&tables::ISO_8859_8),
    ),
    CodePage::new(
        "ISO-8859-9",
        &["ISO_8859-9:1989", "iso-ir-148", "ISO_8859-9", "latin5", "l5", "csISOLatin5"],
        Layout::AsciiCompatible(&tables::ISO_8859_9),
    ),
    CodePage::new(
        "ISO-8859-10",
        &["iso-ir-157", "l6", "ISO_8859-10:1992", "csISOLatin6", "latin6"],
        Layout::AsciiCompatible(&tables::ISO_8859_10),
    ),
    CodePage::new("ISO-8859-11", &["TIS-620"], Layout::AsciiCompatible(&tables::ISO_8859_11)),
    CodePage::new(
        "ISO-8859-13",
        &["latin7", "csISO885913"],
        Layout::AsciiCompatible(&tables::ISO_8859_13),
    ),
    CodePage::new(
        "ISO-8859-14",
        &["iso-ir-199", "ISO_8859-14:1998", "ISO_8859-14", "latin8", "iso-celtic", "l8"],
        Layout::AsciiCompatible(&tables::ISO_8859_14),
    ),
    CodePage::new(
        "ISO-8859-15",
        &["ISO_8859-15", "Latin-9", "csISO885915"],
        Layout::AsciiCompatible(&tables::ISO_8859_15),
    ),
    CodePage::new(
        "ISO-8859-16",
        &["iso-ir-226", "ISO_8859-16:2001", "ISO_8859-16", "latin10", "l10"],
        Layout::AsciiCompatible(&tables::ISO_8859_16),
    ),
    CodePage::new("windows-874", &["cp874"], Layout::AsciiCompatible(&tables::WINDOWS_874)),
    CodePage::new("windows-1250", &["cp1250"], Layout::AsciiCompatible(&tables::WINDOWS_1250)),
    CodePage::new("windows-1251", &["cp1251"], Layout::AsciiCompatible(&tables::WINDOWS_1251)),
    CodePage::new("windows-1252", &["cp1252"], Layout::AsciiCompatible(&tables::WINDOWS_1252)),
    CodePage::new("windows-1253", &["cp1253"], Layout::AsciiCompatible(&tables::WINDOWS_1253)),
    CodePage::new("windows-1254", &["cp1254"], Layout::AsciiCompatible(&tables::WINDOWS_1254)),
    CodePage::new("windows-1255", &["cp1255"], Layout::AsciiCompatible(&tables::WINDOWS_1255)),
    CodePage::new("windows-1256", &["cp1256"], Layout::AsciiCompatible(&tables::WINDOWS_1256)),
    CodePage::new("windows-1257", &["cp1257"], Layout::AsciiCompatible(&tables::WINDOWS_1257)),
    CodePage::new("windows-1258", &["cp1258"], Layout::AsciiCompatible(&tables::WINDOWS_1258)),
    CodePage::new("KOI8-R", &["csKOI8R"], Layout::AsciiCompatible(&tables::KOI8_R)),
    CodePage::new("KOI8-U", &["csKOI8U"], Layout::AsciiCompatible(&tables::KOI8_U)),
    CodePage::new(
        "macintosh",
        &["mac", "macroman", "csMacintosh"],
        Layout::AsciiCompatible(&tables::MACINTOSH),
    ),
    CodePage::new(
        "IBM437",
        &["cp437", "437", "csPC8CodePage437"],
        Layout::AsciiCompatible(&tables::IBM437),
    ),
    CodePage::new(
        "IBM850",
        &["cp850", "850", "csPC850Multilingual"],
        Layout::AsciiCompatible(&tables::IBM850),
    ),
    CodePage::new(
        "IBM866",
        &["cp866", "866", "csIBM866"],
        Layout::AsciiCompatible(&tables::IBM866),
    ),
    CodePage::new(
        "IBM037",
        &["cp037", "ebcdic-cp-us", "ebcdic-cp-ca", "ebcdic-cp-wt", "ebcdic-cp-nl", "csIBM037"],
        Layout::Full(&tables::IBM037),
    ),
    CodePage::new(
        "IBM500",
        &["CP500", "ebcdic-cp-be", "ebcdic-cp-ch", "csIBM500"],
        Layout::Full(&tables::IBM500),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecoderExt, EncoderExt, Status};

    fn page(name: &str) -> &'static CodePage {
        code_pages().iter().find(|page| page.name() == name).unwrap()
    }

    #[test]
    fn test_latin1_is_identity() {
        let latin1 = page("ISO-8859-1");
        for byte in 0..=u8::MAX {
            let c = latin1.code_point(byte).unwrap();
            assert_eq!(u32::from(c), u32::from(byte));
            assert_eq!(latin1.byte_for(c), Some(byte));
        }
        assert_eq!(latin1.byte_for('€'), None);
    }

    #[test]
    fn test_ascii_rejects_high_bytes() {
        let mut decoder = SingleByteDecoder::new(page("US-ASCII"));
        assert_eq!(decoder.decode(b"A"), Decoded::success('A', 1));
        assert_eq!(decoder.decode(b"\xe9"), Decoded::invalid(1));
        assert_eq!(SingleByteEncoder::new(page("US-ASCII")).convert_string("é"), b"?");
    }

    #[test]
    fn test_unassigned_byte_is_invalid() {
        // 0x81 has no assignment in windows-1252
        let mut decoder = SingleByteDecoder::new(page("windows-1252"));
        assert_eq!(decoder.decode(b"\x81"), Decoded::invalid(1));
        assert_eq!(decoder.decode(b"\x80"), Decoded::success('€', 1));
        assert_eq!(decoder.decode(b""), Decoded::NO_ROOM);
    }

    #[test]
    fn test_euro_differs_between_latin_pages() {
        assert_eq!(page("ISO-8859-15").code_point(0xA4), Some('€'));
        assert_eq!(page("ISO-8859-1").code_point(0xA4), Some('¤'));
        assert_eq!(page("windows-1252").byte_for('€'), Some(0x80));
    }

    #[test]
    fn test_ebcdic_full_table() {
        let mut decoder = SingleByteDecoder::new(page("IBM500"));
        assert_eq!(decoder.convert_string(b"\xc8\x85\x93\x93\x96"), "Hello");
        let mut encoder = SingleByteEncoder::new(page("IBM037"));
        assert_eq!(encoder.convert_string("HELLO"), b"\xc8\xc5\xd3\xd3\xd6");
    }

    #[test]
    fn test_encoder_substitutes_question_mark() {
        let mut encoder = SingleByteEncoder::new(page("KOI8-R"));
        let mut buf = [0u8; 1];
        let encoded = encoder.encode(&mut buf, '漢');
        assert_eq!(encoded.status, Status::InvalidChar);
        assert_eq!(buf, *b"?");
        assert_eq!(encoder.encode(&mut [], 'a'), Encoded::NO_ROOM);
    }

    #[test]
    fn test_every_mapped_byte_round_trips() {
        for page in code_pages() {
            for byte in 0..=u8::MAX {
                if let Some(c) = page.code_point(byte) {
                    let back = page.byte_for(c).unwrap();
                    assert_eq!(page.code_point(back), Some(c), "{} byte {byte:#04x}", page.name());
                }
            }
        }
    }
}
