use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages the site ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "RU")]
    Ru,
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "KK")]
    Kk,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ru, Language::En, Language::Kk];

    /// Code used in storage, dropdown links and the change event.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "RU",
            Language::En => "EN",
            Language::Kk => "KK",
        }
    }

    /// Value for the document `lang` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
            Language::Kk => "kk",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
