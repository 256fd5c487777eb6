use serde::Serialize;

use crate::error::AppError;

/// Output languages offered in the sidebar, with the codes the translation
/// endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    English,
    Hindi,
    Bengali,
    Marathi,
    Tamil,
    Telugu,
    Gujarati,
    Punjabi,
    Kannada,
    Malayalam,
    Spanish,
    French,
    German,
    ChineseSimplified,
    Japanese,
    Russian,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 17] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Marathi,
        Language::Tamil,
        Language::Telugu,
        Language::Gujarati,
        Language::Punjabi,
        Language::Kannada,
        Language::Malayalam,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::ChineseSimplified,
        Language::Japanese,
        Language::Russian,
        Language::Arabic,
    ];

    /// The model answers in English, so English needs no translation.
    pub const DEFAULT: Language = Language::English;

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
            Language::Marathi => "Marathi",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Gujarati => "Gujarati",
            Language::Punjabi => "Punjabi",
            Language::Kannada => "Kannada",
            Language::Malayalam => "Malayalam",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::ChineseSimplified => "Chinese (Simplified)",
            Language::Japanese => "Japanese",
            Language::Russian => "Russian",
            Language::Arabic => "Arabic",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Bengali => "bn",
            Language::Marathi => "mr",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Gujarati => "gu",
            Language::Punjabi => "pa",
            Language::Kannada => "kn",
            Language::Malayalam => "ml",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::ChineseSimplified => "zh-cn",
            Language::Japanese => "ja",
            Language::Russian => "ru",
            Language::Arabic => "ar",
        }
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }

    /// Accepts either the display label ("French") or the code ("fr").
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.label() == value || lang.code().eq_ignore_ascii_case(value))
            .ok_or_else(|| AppError::UnknownLanguage(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seventeen_languages_with_unique_codes() {
        let codes: std::collections::HashSet<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes.len(), 17);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::DEFAULT.code(), "en");
        assert!(Language::English.is_default());
        assert!(!Language::French.is_default());
    }

    #[test]
    fn test_parse_label_and_code() {
        assert_eq!(Language::parse("French").unwrap(), Language::French);
        assert_eq!(Language::parse("fr").unwrap(), Language::French);
        assert_eq!(Language::parse("ZH-CN").unwrap(), Language::ChineseSimplified);
        assert_eq!(
            Language::parse("Chinese (Simplified)").unwrap().code(),
            "zh-cn"
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            Language::parse("Klingon"),
            Err(AppError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_every_variant_has_its_own_entry() {
        for lang in Language::ALL {
            assert_eq!(Language::parse(lang.code()).unwrap(), lang);
        }
    }
}
