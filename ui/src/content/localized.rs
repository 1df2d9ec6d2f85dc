//! Localized content: per-record bilingual fields and the UI string dictionary.

use std::collections::HashMap;

use serde::Deserialize;

use crate::core::lang::Lang;

/// The same text authored in both site languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    fn exact(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Ar => &self.ar,
        }
    }

    /// Text for `lang`, falling back to the other language when that branch is blank.
    pub fn resolve(&self, lang: Lang) -> &str {
        let primary = self.exact(lang);
        if primary.is_empty() {
            self.exact(lang.toggled())
        } else {
            primary
        }
    }
}

/// `translations.json`: language tag -> UI string key -> display string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Translations(HashMap<String, HashMap<String, String>>);

impl Translations {
    fn lookup(&self, lang: Lang, key: &str) -> Option<&str> {
        self.0
            .get(lang.code())
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Display string for `key`; other language next, then empty.
    pub fn text(&self, lang: Lang, key: &str) -> &str {
        self.lookup(lang, key)
            .or_else(|| self.lookup(lang.toggled(), key))
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(HashMap::is_empty)
    }
}
