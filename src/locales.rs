//! Target locale configuration.

/// Canonical Norwegian locale code.
pub const NORWEGIAN: &str = "no";

/// Norwegian Bokmål code emitted by some translation platforms.
pub const NORWEGIAN_BOKMAL: &str = "nb";

/// Locales every translatable string is expected to cover, matching the
/// App Store metadata languages.
pub const DEFAULT_TARGET_LOCALES: &[&str] = &[
    "ar-SA", "ca", "cs", "da", "de-DE", "el", "en", "en-AU", "en-CA", "en-GB", "en-US", "es-ES",
    "es-MX", "fi", "fr-CA", "fr-FR", "he", "hi", "hr", "hu", "id", "it", "ja", "ko", "ms", "nl-NL",
    "no", "pl", "pt-BR", "pt-PT", "ro", "ru", "sk", "sv", "th", "tr", "uk", "vi", "zh-Hans",
    "zh-Hant",
];

/// Ordered, immutable list of locale codes checked by the scanner and verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLocaleSet {
    codes: Vec<String>,
}

impl TargetLocaleSet {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for TargetLocaleSet {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_LOCALES.iter().copied())
    }
}
