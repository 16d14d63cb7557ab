use std::collections::BTreeMap;
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Marker returned for multilingual fields that were never filled; loud, so
/// a missing translation shows up in rendered output instead of collapsing
/// to an empty string.
pub const NO_TRANSLATION: &str = "-- translation not initialized --";

/// Fallback policy for resolving a `LocalizedText` against a language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locales {
    /// Tried after the requested code itself.
    pub preferred: String,
    /// Full ordered list of configured language codes; its first entry is the
    /// resolution of last resort, and `all()` concatenates in this order.
    pub order: Vec<String>,
}

impl Default for Locales {
    fn default() -> Self {
        Self {
            preferred: "en".into(),
            order: vec!["en".into()],
        }
    }
}

impl Locales {
    pub fn new(preferred: impl Into<String>, order: Vec<String>) -> Self {
        Self {
            preferred: preferred.into(),
            order,
        }
    }
}

/// Outcome of resolving a `LocalizedText` for one language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The requested language code was present.
    Exact(&'a str),
    /// A fallback code supplied the value.
    Fallback(&'a str),
    /// Nothing usable was found.
    Missing,
}

impl<'a> Resolution<'a> {
    pub fn value(self) -> Option<&'a str> {
        match self {
            Resolution::Exact(value) | Resolution::Fallback(value) => Some(value),
            Resolution::Missing => None,
        }
    }
}

/// A multilingual string: one value per language code.
///
/// Serializes as a plain JSON object, e.g. `{"de": "Frage", "en": "Question"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct LocalizedText(pub BTreeMap<String, String>);

impl LocalizedText {
    /// A text carrying exactly one language; used for dynamic render-time
    /// content which exists only in the respondent's current language.
    pub fn single(lang: impl Into<String>, value: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(lang.into(), value.into());
        Self(map)
    }

    /// Whether any mapping exists at all.
    pub fn is_set(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }

    pub fn insert(&mut self, lang: impl Into<String>, value: impl Into<String>) {
        self.0.insert(lang.into(), value.into());
    }

    /// Resolves the requested code, then `locales.preferred`, then the first
    /// entry of `locales.order`.
    pub fn resolve<'a>(&'a self, lang: &str, locales: &Locales) -> Resolution<'a> {
        if let Some(value) = self.0.get(lang) {
            return Resolution::Exact(value);
        }
        if let Some(value) = self.0.get(&locales.preferred) {
            return Resolution::Fallback(value);
        }
        if let Some(first) = locales.order.first()
            && let Some(value) = self.0.get(first)
        {
            return Resolution::Fallback(value);
        }
        Resolution::Missing
    }

    /// Translation with a loud sentinel for missing values.
    pub fn tr<'a>(&'a self, lang: &str, locales: &Locales) -> &'a str {
        self.resolve(lang, locales).value().unwrap_or(NO_TRANSLATION)
    }

    /// Translation that degrades to an empty string; for contexts where
    /// absence is acceptable, e.g. optional HTML attributes.
    pub fn tr_silent<'a>(&'a self, lang: &str, locales: &Locales) -> &'a str {
        self.resolve(lang, locales).value().unwrap_or("")
    }

    /// Every language's value in `locales.order`, each followed by a blank
    /// line; used for multi-language plain-text digests.
    pub fn all(&self, locales: &Locales) -> String {
        let mut ret = String::new();
        for code in &locales.order {
            if let Some(value) = self.0.get(code) {
                ret.push_str(value);
                ret.push_str("\n\n");
            }
        }
        ret
    }

    /// All-or-nothing completeness probe over the configured language codes:
    /// returns `None` when the text is unset, or empty for every code, or
    /// non-empty for every code; otherwise the first code whose value is
    /// missing or blank.
    pub fn missing_language<'a, I>(&self, lang_codes: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        if !self.is_set() {
            return None;
        }
        let all_empty = lang_codes
            .clone()
            .into_iter()
            .all(|code| self.get(code).is_none_or(|value| value.trim().is_empty()));
        if all_empty {
            return None;
        }
        lang_codes
            .into_iter()
            .find(|code| self.get(code).is_none_or(|value| value.trim().is_empty()))
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for LocalizedText
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(lang, value)| (lang.into(), value.into()))
                .collect(),
        )
    }
}

// Words with their soft-hyphenated forms, applied once at template creation.
static HYPHENATIONS: &[&str] = &[
    "Ein&shy;schät&shy;zung",
    "Kredit&shy;nach&shy;frage",
    "Kredit&shy;an&shy;gebot",
    "Re&shy;finanz&shy;ierung",
    "Regu&shy;lierung",
    "Wett&shy;be&shy;werbs&shy;sit&shy;uation",
    "Groß&shy;unter&shy;nehmen",
    "Immob&shy;ilien&shy;kredite",
    "Kon&shy;sum&shy;enten&shy;kredite",
    "mittel&shy;fristig",
    "lang&shy;fristig",
    "question&shy;naire",
];

static HYPHENATION_MAP: LazyLock<BTreeMap<String, &'static str>> = LazyLock::new(|| {
    HYPHENATIONS
        .iter()
        .map(|hyphenated| (hyphenated.replace("&shy;", ""), *hyphenated))
        .collect()
});

/// Replaces every dictionary word with its soft-hyphenated (`&shy;`) form.
pub fn hyphenate(text: &str) -> String {
    let mut ret = text.to_string();
    for (plain, hyphenated) in HYPHENATION_MAP.iter() {
        if ret.contains(plain.as_str()) {
            ret = ret.replace(plain.as_str(), hyphenated);
        }
    }
    ret
}
