use std::collections::HashMap;

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

pub const DEFAULT_LANGUAGE: &str = "en";

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "es",
            LanguageInfo {
                code: "es",
                flag: "🇪🇸",
                translation: include_str!("../translations/es.json"),
                native_name: "Español",
            },
        ),
    ])
}

/// Raw bundles keyed by language code, in the shape `I18nProvider` expects.
pub fn translation_bundles() -> HashMap<&'static str, &'static str> {
    supported_languages()
        .into_iter()
        .map(|(code, info)| (code, info.translation))
        .collect()
}
