//! Built-in codecs
//!
//! Every codec implements the [`Decoder`](crate::Decoder) and
//! [`Encoder`](crate::Encoder) traits and is reachable by name through the
//! [`Registry`](crate::Registry).

pub mod euc_jp;
pub mod shift_jis;
pub mod single_byte;
pub mod utf16;
pub mod utf8;

use crate::registry::{Charset, Registry};

/// Register every built-in charset, in a fixed order
pub(crate) fn register_builtins(registry: &mut Registry) {
    registry.register(Charset::new(
        "UTF-8",
        &["utf8"],
        || Box::new(utf8::Utf8Decoder),
        || Box::new(utf8::Utf8Encoder),
    ));

    utf16::register(registry);

    registry.register(Charset::new(
        "Shift_JIS",
        &["MS_Kanji", "csShiftJIS", "SJIS"],
        || Box::new(shift_jis::ShiftJisDecoder::new()),
        || Box::new(shift_jis::ShiftJisEncoder::new()),
    ));

    registry.register(Charset::new(
        "EUC-JP",
        &[
            "csEUCPkdFmtJapanese",
            "Extended_UNIX_Code_Packed_Format_for_Japanese",
        ],
        || Box::new(euc_jp::EucJpDecoder::new()),
        || Box::new(euc_jp::EucJpEncoder::new()),
    ));

    single_byte::register(registry);
}
