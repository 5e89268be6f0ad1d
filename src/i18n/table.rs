use std::collections::HashMap;

use crate::error::SiteResult;
use crate::i18n::language::Language;

const HOME_DICTIONARY: &str = include_str!("../../assets/i18n/home.json");
const ABOUT_DICTIONARY: &str = include_str!("../../assets/i18n/about.json");

/// Page variants carrying their own dictionary. The two are maintained
/// separately and disagree on shared keys, so they are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dictionary {
    Home,
    About,
}

impl Dictionary {
    /// Resolves the `data-page` value on `<body>`.
    pub fn for_page(page: Option<&str>) -> Dictionary {
        match page.map(str::trim) {
            Some(p) if p.eq_ignore_ascii_case("about") => Dictionary::About,
            _ => Dictionary::Home,
        }
    }

    fn source(self) -> &'static str {
        match self {
            Dictionary::Home => HOME_DICTIONARY,
            Dictionary::About => ABOUT_DICTIONARY,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    languages: HashMap<Language, HashMap<String, String>>,
}

impl TranslationTable {
    pub fn load(dictionary: Dictionary) -> SiteResult<Self> {
        Self::from_json(dictionary.source())
    }

    pub fn from_json(source: &str) -> SiteResult<Self> {
        let languages = serde_json::from_str(source)?;
        Ok(Self { languages })
    }

    #[cfg(test)]
    pub fn insert(&mut self, lang: Language, key: impl Into<String>, value: impl Into<String>) {
        self.languages
            .entry(lang)
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn supports(&self, lang: Language) -> bool {
        self.languages.contains_key(&lang)
    }

    /// Empty strings count as missing so a gap never blanks a label.
    pub fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        self.languages
            .get(&lang)?
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn key_count(&self, lang: Language) -> usize {
        self.languages.get(&lang).map_or(0, HashMap::len)
    }
}
