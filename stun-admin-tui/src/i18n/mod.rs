//! Internationalization
//!
//! Each language is a `const` [`Translations`] table. The active table is
//! chosen once at startup and handed to the model; nothing reads a global.

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::Translations;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English (United States)
    #[default]
    EnUs,
    /// Simplified Chinese (China)
    ZhCn,
}

impl Language {
    /// Language code (BCP 47)
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// Parse a language code; bare language subtags are accepted
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::ZhCn => &zh_cn::TRANSLATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in [Language::EnUs, Language::ZhCn] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("zh"), Some(Language::ZhCn));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn english_plurals() {
        let t = Language::EnUs.translations();
        assert_eq!((t.stun.server_count)(1), "1 STUN server");
        assert_eq!((t.stun.server_count)(3), "3 STUN servers");
    }

    #[test]
    fn chinese_has_no_plural_form() {
        let t = Language::ZhCn.translations();
        assert_eq!((t.stun.server_count)(1), "1 个 STUN 服务器");
        assert_eq!((t.stun.server_count)(2), "2 个 STUN 服务器");
    }
}
