//! Static interface strings for `academy-ui`.
//!
//! Content text (course titles, the `translations.json` dictionary) arrives
//! with the data documents. The few labels the documents never carry (the
//! archive page chrome, contact card captions, loading and copy feedback) are
//! Fluent messages embedded at compile time:
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/academy-ui.ftl   (fallback/reference)
//!   ar-EG/academy-ui.ftl
//! ```
//!
//! There is one loader per [`Lang`], so a lookup always names the language it
//! wants and no process-wide "current language" exists:
//! ```ignore
//! let label = t!(lang, "archive-title");
//! ```
//!
//! To add a message, add it to `en-US` first, then translate it; the
//! completeness tests fail when a locale lags behind.
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::lang::Lang;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Translation macro: `t!(lang, "key")` or `t!(lang, "key", name = value)`.
///
/// Expands to `fl!` against the loader of `lang`, so keys are checked against
/// the fallback bundle at compile time.
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; matches the crate name and the FTL file name.
const DOMAIN: &str = "academy-ui";

const FALLBACK_LOCALE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static ENGLISH: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Lang::En));
static ARABIC: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Lang::Ar));

fn build_loader(lang: Lang) -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK_LOCALE
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);

    match lang.locale().parse::<LanguageIdentifier>() {
        Ok(requested) => {
            if let Err(err) = i18n_embed::select(&loader, &Localizations, &[requested]) {
                tracing::error!(locale = lang.locale(), %err, "failed selecting Fluent bundle; using fallback");
            }
        }
        Err(err) => {
            tracing::error!(locale = lang.locale(), %err, "invalid locale identifier");
        }
    }

    loader
}

/// Loader holding the bundle for `lang` (with the English fallback behind it).
pub fn loader(lang: Lang) -> &'static FluentLanguageLoader {
    match lang {
        Lang::En => &ENGLISH,
        Lang::Ar => &ARABIC,
    }
}

/// Build every loader up front (idempotent).
pub fn init() {
    Lazy::force(&ENGLISH);
    Lazy::force(&ARABIC);
}

/// Embedded locale folders, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_site_language_is_embedded() {
        let langs = available_languages();
        for lang in Lang::ALL {
            assert!(langs.iter().any(|l| l == lang.locale()), "{} missing", lang.locale());
        }
    }

    #[test]
    fn lookups_follow_the_requested_language() {
        init();
        assert_eq!(crate::t!(Lang::En, "archive-title"), "Archived Courses");
        assert_eq!(crate::t!(Lang::Ar, "archive-title"), "الدورات المؤرشفة");
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(crate::t!(Lang::En, "language-toggle"), "العربية");
        assert_eq!(crate::t!(Lang::Ar, "language-toggle"), "English");
    }
}
