//! Charset registry: resolves names and aliases to codec factories
//!
//! Names are compared after [`normalize_name`], so `"ISO 8859-1"`,
//! `"iso88591"` and `"ISO-8859-1"` all find the same charset.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use crate::{Decoder, Encoder};

/// Produces a fresh decoder for one stream
pub type DecoderFactory = Box<dyn Fn() -> Box<dyn Decoder> + Send + Sync>;

/// Produces a fresh encoder for one stream
pub type EncoderFactory = Box<dyn Fn() -> Box<dyn Encoder> + Send + Sync>;

/// A named charset and the factories for its per-stream codec state
pub struct Charset {
    name: &'static str,
    aliases: &'static [&'static str],
    new_decoder: DecoderFactory,
    new_encoder: EncoderFactory,
}

impl Charset {
    /// Describe a charset from its canonical name, aliases and factories
    pub fn new<D, E>(
        name: &'static str,
        aliases: &'static [&'static str],
        new_decoder: D,
        new_encoder: E,
    ) -> Self
    where
        D: Fn() -> Box<dyn Decoder> + Send + Sync + 'static,
        E: Fn() -> Box<dyn Encoder> + Send + Sync + 'static,
    {
        Self {
            name,
            aliases,
            new_decoder: Box::new(new_decoder),
            new_encoder: Box::new(new_encoder),
        }
    }

    /// Canonical name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Alternative names
    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Canonical name followed by every alias
    pub fn all_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    /// Fresh decoder state for a new stream
    pub fn new_decoder(&self) -> Box<dyn Decoder> {
        (self.new_decoder)()
    }

    /// Fresh encoder state for a new stream
    pub fn new_encoder(&self) -> Box<dyn Encoder> {
        (self.new_encoder)()
    }

    /// Serializable summary for listings
    pub fn info(&self) -> CharsetInfo {
        CharsetInfo {
            name: self.name,
            aliases: self.aliases.to_vec(),
        }
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Charset")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

/// Name and aliases of a registered charset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharsetInfo {
    /// Canonical name
    pub name: &'static str,
    /// Alternative names
    pub aliases: Vec<&'static str>,
}

/// Lowercase `name` and drop everything that is not a letter or digit
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Charsets indexed by normalized name and alias
#[derive(Debug, Default)]
pub struct Registry {
    charsets: Vec<Charset>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in charset
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::codecs::register_builtins(&mut registry);
        tracing::debug!(
            charsets = registry.charsets.len(),
            names = registry.index.len(),
            "built-in charset registry assembled"
        );
        registry
    }

    /// Add `charset` under its canonical name and every alias.
    ///
    /// A name that is already taken now resolves to `charset`.
    pub fn register(&mut self, charset: Charset) {
        let slot = self.charsets.len();
        self.charsets.push(charset);

        let charset = &self.charsets[slot];
        for name in charset.all_names() {
            match self.index.insert(normalize_name(name), slot) {
                Some(previous) if previous != slot => tracing::debug!(
                    name,
                    replaced = self.charsets[previous].name,
                    "charset name re-registered"
                ),
                _ => {}
            }
        }
    }

    /// Find the charset registered under `name`
    pub fn lookup(&self, name: &str) -> Option<&Charset> {
        self.index
            .get(&normalize_name(name))
            .map(|&slot| &self.charsets[slot])
    }

    /// Fresh decoder for the charset named `name`
    pub fn new_decoder(&self, name: &str) -> Option<Box<dyn Decoder>> {
        self.lookup(name).map(Charset::new_decoder)
    }

    /// Fresh encoder for the charset named `name`
    pub fn new_encoder(&self, name: &str) -> Option<Box<dyn Encoder>> {
        self.lookup(name).map(Charset::new_encoder)
    }

    /// Registered charsets in registration order
    pub fn charsets(&self) -> impl Iterator<Item = &Charset> {
        self.charsets.iter()
    }
}

/// The process-wide registry of built-in charsets
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::with_builtins)
}

/// Find a built-in charset by name
pub fn lookup(name: &str) -> Option<&'static Charset> {
    registry().lookup(name)
}

/// Fresh decoder for the built-in charset named `name`
pub fn new_decoder(name: &str) -> Option<Box<dyn Decoder>> {
    registry().new_decoder(name)
}

/// Fresh encoder for the built-in charset named `name`
pub fn new_encoder(name: &str) -> Option<Box<dyn Encoder>> {
    registry().new_encoder(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::utf8::{Utf8Decoder, Utf8Encoder};
    use crate::{Decoded, DecoderExt};

    #[test]
    fn test_normalize_name() {
        let cases = [
            ("utf8", "utf8"),
            ("ISO 8859-1", "iso88591"),
            ("Big5", "big5"),
            ("Shift_JIS", "shiftjis"),
            ("ANSI_X3.4-1968", "ansix341968"),
            ("", ""),
        ];
        for (name, normalized) in cases {
            assert_eq!(normalize_name(name), normalized, "normalizing {name:?}");
        }
    }

    #[test]
    fn test_lookup_ignores_case_and_punctuation() {
        for name in ["ISO 8859-1", "iso88591", "ISO-8859-1", "iso_8859_1", "Latin-1"] {
            let charset = lookup(name).unwrap_or_else(|| panic!("{name} not found"));
            assert_eq!(charset.name(), "ISO-8859-1");
        }
    }

    #[test]
    fn test_aliases_resolve_to_canonical_charset() {
        assert_eq!(lookup("SJIS").unwrap().name(), "Shift_JIS");
        assert_eq!(lookup("ms_kanji").unwrap().name(), "Shift_JIS");
        assert_eq!(lookup("cp1252").unwrap().name(), "windows-1252");
        assert_eq!(lookup("ascii").unwrap().name(), "US-ASCII");
        assert!(lookup("Shift_JIS").unwrap().aliases().contains(&"SJIS"));
    }

    #[test]
    fn test_unknown_name() {
        assert!(lookup("klingon").is_none());
        assert!(registry().new_decoder("").is_none());
        assert!(registry().new_encoder("utf-9").is_none());
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = Registry::new();
        assert!(registry.lookup("utf8").is_none());

        registry.register(Charset::new(
            "X-Test",
            &["testing"],
            || Box::new(Utf8Decoder),
            || Box::new(Utf8Encoder),
        ));

        let charset = registry.lookup("x test").unwrap();
        assert_eq!(charset.name(), "X-Test");
        assert_eq!(charset.aliases(), &["testing"]);
        let mut decoder = registry.new_decoder("TESTING").unwrap();
        assert_eq!(decoder.decode(b"a"), Decoded::success('a', 1));
        assert_eq!(registry.charsets().count(), 1);
    }

    #[test]
    fn test_later_registration_wins() {
        let utf8 = |name: &'static str| {
            Charset::new(name, &["shared"], || Box::new(Utf8Decoder), || Box::new(Utf8Encoder))
        };
        let mut registry = Registry::new();
        registry.register(utf8("first"));
        registry.register(utf8("second"));
        assert_eq!(registry.lookup("shared").unwrap().name(), "second");
        assert_eq!(registry.lookup("first").unwrap().name(), "first");
    }

    #[test]
    fn test_factories_produce_independent_state() {
        let charset = lookup("UTF-16").unwrap();
        let mut first = charset.new_decoder();
        let mut second = charset.new_decoder();

        assert_eq!(first.decode(b"\xff\xfeA\x00").status, crate::Status::StateOnly);
        assert_eq!(first.decode(b"A\x00"), Decoded::success('A', 2));
        // the second stream has not sniffed a byte-order mark yet
        assert_eq!(second.convert_string(b"\x00A"), "A");
    }

    #[test]
    fn test_info_lists_aliases() {
        let info = lookup("Shift_JIS").unwrap().info();
        assert_eq!(info.name, "Shift_JIS");
        assert!(info.aliases.contains(&"SJIS"));
    }
}
