//! Localization for `iherd-ui`.
//!
//! Every supported language gets its own `FluentLanguageLoader`, built once
//! from the `.ftl` files embedded under `i18n/`. Loaders never fall back to
//! each other: a language either defines a message or the id is rendered as-is,
//! and the completeness tests keep that from happening.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en/iherd-ui.ftl   (reference for compile-time checked `fl!` lookups)
//!   ta/iherd-ui.ftl
//!   hi/iherd-ui.ftl
//!   te/iherd-ui.ftl
//! ```
//!
//! Usage in a component:
//! ```ignore
//! use crate::t;
//! let title = t!(lang, "about-title");
//! let position = t!(lang, "nav-position", current = "3", total = "14");
//! ```
//!
//! Dynamic ids (product copy built from the catalogue) go through
//! [`Catalog::text`].
use std::fmt;

use dioxus::logger::tracing::{debug, error};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro bound to an explicit language.
///
/// ```ignore
/// t!(lang, "nav-next")
/// t!(lang, "nav-goto-slide", index = "4")
/// ```
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; every locale folder holds `{DOMAIN}.ftl`.
const DOMAIN: &str = "iherd-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Languages the site ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    En,
    #[default]
    Ta,
    Hi,
    Te,
}

impl Language {
    /// Switcher order.
    pub const ALL: [Language; 4] = [Language::En, Language::Ta, Language::Hi, Language::Te];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ta => "ta",
            Language::Hi => "hi",
            Language::Te => "te",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Name of the language in its own script.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ta => "தமிழ்",
            Language::Hi => "हिंदी",
            Language::Te => "తెలుగు",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::Ta | Language::Hi | Language::Te => "🇮🇳",
        }
    }

    fn index(self) -> usize {
        match self {
            Language::En => 0,
            Language::Ta => 1,
            Language::Hi => 2,
            Language::Te => 3,
        }
    }

    fn langid(self) -> LanguageIdentifier {
        self.code()
            .parse()
            .expect("language codes are valid identifiers")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn build_loader(lang: Language) -> FluentLanguageLoader {
    let id = lang.langid();
    let loader = FluentLanguageLoader::new(DOMAIN, id.clone());
    match i18n_embed::select(&loader, &Localizations, &[id]) {
        Ok(selected) => debug!(lang = %lang, ?selected, "localization loaded"),
        Err(err) => error!(lang = %lang, "failed loading localization: {err}"),
    }
    // Interpolated numbers and names should render without bidi marks.
    loader.set_use_isolating(false);
    loader
}

static LOADERS: Lazy<[FluentLanguageLoader; 4]> = Lazy::new(|| Language::ALL.map(build_loader));

/// Loader for `lang`, used by the [`t!`] macro.
pub fn loader(lang: Language) -> &'static FluentLanguageLoader {
    &LOADERS[lang.index()]
}

/// The complete string table of one language.
#[derive(Clone, Copy)]
pub struct Catalog {
    language: Language,
}

impl Catalog {
    /// Message for a runtime id.
    pub fn text(&self, id: &str) -> String {
        loader(self.language).get(id)
    }

    pub fn has(&self, id: &str) -> bool {
        loader(self.language).has(id)
    }
}

pub fn catalog(lang: Language) -> Catalog {
    Catalog { language: lang }
}

/// Locale folders embedded in the binary.
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
    fn every_language_is_embedded() {
        let embedded = available_languages();
        for lang in Language::ALL {
            assert!(embedded.iter().any(|l| l == lang.code()), "{lang} missing");
        }
    }

    #[test]
    fn default_language_is_tamil() {
        assert_eq!(Language::default(), Language::Ta);
    }

    #[test]
    fn codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn lookups_are_per_language() {
        assert_eq!(t!(Language::En, "nav-next"), "Next");
        assert_ne!(t!(Language::Ta, "nav-next"), t!(Language::En, "nav-next"));
        assert_ne!(t!(Language::Hi, "nav-next"), t!(Language::Te, "nav-next"));
    }

    #[test]
    fn arguments_render_without_isolation_marks() {
        let s = t!(Language::En, "nav-position", current = "3", total = "14");
        assert_eq!(s, "3 / 14");
    }

    #[test]
    fn dynamic_lookup_matches_macro() {
        let en = catalog(Language::En);
        assert!(en.has("about-title"));
        assert_eq!(en.text("about-title"), t!(Language::En, "about-title"));
        assert!(!en.has("no-such-message"));
    }
}
