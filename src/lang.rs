//! Language table and lookups
//!
//! The table is fixed at build time. Codes follow the host application's
//! conventions (`zh-Hans`, `zh-Hant`, `yue` for Cantonese, `wyw` for
//! Classical Chinese). Display names feed generated prompt text; the
//! Chinese-specific variants carry Chinese display names so that generated
//! Chinese instructions read naturally.

/// Language code to display name, in host presentation order
const LANGUAGES: &[(&str, &str)] = &[
    ("zh-Hans", "Chinese (Simplified)"),
    ("zh-Hant", "Chinese (Traditional)"),
    ("yue", "粤语"),
    ("wyw", "文言文"),
    ("en", "English"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("fr", "French"),
    ("de", "German"),
    ("es", "Spanish"),
    ("it", "Italian"),
    ("ru", "Russian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("ar", "Arabic"),
    ("tr", "Turkish"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("id", "Indonesian"),
    ("hi", "Hindi"),
    ("uk", "Ukrainian"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("fi", "Finnish"),
    ("no", "Norwegian"),
    ("cs", "Czech"),
    ("hu", "Hungarian"),
    ("el", "Greek"),
    ("he", "Hebrew"),
    ("ro", "Romanian"),
];

/// Resolve a language code to its display name.
///
/// Unknown codes resolve to themselves so prompt generation never fails.
pub fn display_name(code: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

/// Whether a code belongs to the supported set
pub fn is_supported(code: &str) -> bool {
    LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Every supported language code, in table order
pub fn supported_languages() -> Vec<String> {
    LANGUAGES.iter().map(|(code, _)| (*code).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_known_codes() {
        assert_eq!(display_name("en"), "English");
        assert_eq!(display_name("zh-Hans"), "Chinese (Simplified)");
        assert_eq!(display_name("zh-Hant"), "Chinese (Traditional)");
        assert_eq!(display_name("wyw"), "文言文");
        assert_eq!(display_name("yue"), "粤语");
    }

    #[test]
    fn test_display_name_unknown_code_falls_through() {
        assert_eq!(display_name("tlh"), "tlh");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_every_table_code_is_supported() {
        for code in supported_languages() {
            assert!(is_supported(&code), "table code {} must be supported", code);
        }
    }

    #[test]
    fn test_unknown_codes_are_not_supported() {
        assert!(!is_supported("tlh"));
        assert!(!is_supported("EN"));
        assert!(!is_supported(""));
    }

    #[test]
    fn test_supported_languages_preserves_table_order() {
        let codes = supported_languages();
        assert_eq!(codes[0], "zh-Hans");
        assert_eq!(codes[1], "zh-Hant");
        assert_eq!(codes[2], "yue");
        assert_eq!(codes[3], "wyw");
        assert_eq!(codes.len(), 31);
    }
}
