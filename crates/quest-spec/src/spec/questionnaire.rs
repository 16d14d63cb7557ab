use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::i18n::{self, LocalizedText, Locales};
use crate::registry::Registry;
use crate::spec::input::{Input, InputType};
use crate::spec::page::Page;
use crate::validate::SpecError;

/// Identity of the survey a questionnaire instance belongs to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Survey {
    /// Survey type key, `[a-z0-9_-]+`; part of every persisted file path.
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub org: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub name: LocalizedText,
    /// One time-bound instance of a recurring survey, e.g. `2026-q1`.
    #[serde(default)]
    pub wave_id: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

/// The root aggregate: the full multi-page survey for one respondent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Questionnaire {
    pub survey: Survey,
    /// Verified respondent identity; part of the response file path.
    #[serde(default)]
    pub user_id: String,
    /// Language code → display name.
    #[serde(default)]
    pub lang_codes: BTreeMap<String, String>,
    /// Ordered language codes; same cardinality as `lang_codes` and every
    /// entry must be one of its keys.
    #[serde(default)]
    pub lang_codes_order: Vec<String>,
    /// The respondent's current language; if set, must be a key of
    /// `lang_codes`.
    #[serde(default)]
    pub lang_code: String,
    /// Index of the page the respondent currently sees.
    #[serde(default)]
    pub curr_page: usize,
    /// Maximum group count across all pages; computed.
    #[serde(default)]
    pub max_groups: usize,
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Questionnaire {
    /// Appends a fresh page and returns it for configuration.
    pub fn add_page(&mut self) -> &mut Page {
        self.pages.push(Page::default());
        self.pages.last_mut().expect("just pushed")
    }

    /// Fallback policy derived from the configured language codes.
    pub fn locales(&self) -> Locales {
        Locales::new("en", self.lang_codes_order.clone())
    }

    /// First input with the given name, page-major order.
    pub fn input_by_name(&self, name: &str) -> Option<&Input> {
        self.pages
            .iter()
            .flat_map(|page| &page.groups)
            .flat_map(|group| &group.inputs)
            .find(|input| input.name == name)
    }

    /// Response of the named input; the lookup navigation predicates and
    /// cross-page checks should use instead of positional access.
    pub fn response_by_name(&self, name: &str) -> Option<&str> {
        self.input_by_name(name).map(|input| input.response.as_str())
    }

    /// Stores a respondent answer by input name; false if no such input.
    pub fn set_response(&mut self, name: &str, value: impl Into<String>) -> bool {
        for page in &mut self.pages {
            for group in &mut page.groups {
                for input in &mut group.inputs {
                    if input.name == name {
                        input.response = value.into();
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Recomputes `max_groups` from the current page list.
    pub fn compute_max_groups(&mut self) {
        self.max_groups = self
            .pages
            .iter()
            .map(|page| page.groups.len())
            .max()
            .unwrap_or(0);
    }

    /// Applies the soft-hyphenation dictionary to every input label, desc,
    /// and suffix. Run once at template creation.
    pub fn hyphenize(&mut self) {
        for page in &mut self.pages {
            for group in &mut page.groups {
                for input in &mut group.inputs {
                    for text in [&mut input.label, &mut input.desc, &mut input.suffix] {
                        for value in text.0.values_mut() {
                            *value = i18n::hyphenate(value);
                        }
                    }
                }
            }
        }
    }

    /// Answered and answerable input counts plus their ratio.
    ///
    /// Layout inputs and textareas do not count as answerable.
    pub fn statistics(&self) -> (usize, usize, f64) {
        let mut responses = 0;
        let mut inputs = 0;
        for page in &self.pages {
            for group in &page.groups {
                for input in &group.inputs {
                    if input.is_layout() || input.kind == InputType::Textarea {
                        continue;
                    }
                    inputs += 1;
                    if !input.response.is_empty() {
                        responses += 1;
                    }
                }
            }
        }
        let ratio = if inputs == 0 {
            0.0
        } else {
            responses as f64 / inputs as f64
        };
        (responses, inputs, ratio)
    }

    /// The full creation-time pipeline: normalize, validate, check
    /// translation completeness, hyphenize, compute `max_groups`.
    ///
    /// Any error means the template must not be served.
    pub fn finalize(&mut self, registry: &Registry) -> Result<(), SpecError> {
        crate::normalize::normalize(self);
        crate::validate::validate(self, registry)?;
        crate::validate::translation_completeness(self)?;
        self.hyphenize();
        self.compute_max_groups();
        Ok(())
    }
}
