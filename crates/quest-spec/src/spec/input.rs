use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::i18n::LocalizedText;

/// Form-field names the surrounding request plumbing claims for itself.
/// Inputs must not reuse them.
pub const RESERVED_NAMES: &[&str] = &[
    "page",
    "lang_code",
    "token",
    "submit",
    "mobile",
    "skip_validation",
];

/// The closed set of input kinds.
///
/// Unknown kinds cannot be constructed; deserializing one fails with a serde
/// error naming the offending string and the accepted set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    #[default]
    Text,
    Number,
    Textarea,
    Dropdown,
    Radio,
    Checkbox,
    Button,
    Textblock,
    Dynamic,
    DynComposite,
    DynCompositeScalar,
    Hidden,
}

impl InputType {
    /// Layout inputs render static or derived content and are exempt from the
    /// name-uniqueness and navigation rules.
    pub fn is_layout(self) -> bool {
        matches!(
            self,
            InputType::Textblock | InputType::Button | InputType::Dynamic | InputType::DynComposite
        )
    }
}

/// Horizontal alignment hint; opaque to the engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// One selectable option of a radio input.
///
/// Options declared with an empty `val` are auto-numbered `"1".."N"` in
/// declaration order by the normalization pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct RadioOption {
    #[serde(default)]
    pub val: String,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub label: LocalizedText,
}

/// The leaf entity of a questionnaire: a single question, label, button, or
/// dynamic element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Input {
    /// Required for non-layout inputs; `[a-z0-9_-]+`, lower-case, globally
    /// unique across the questionnaire.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: InputType,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub label: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub desc: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub suffix: LocalizedText,
    /// The respondent's answer; for `button` inputs an optional target page
    /// index encoded as a decimal string.
    #[serde(default)]
    pub response: String,
    /// Name of a registered response validator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<String>,
    /// Name of a registered dynamic-content function; required for `dynamic`
    /// inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_func: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub radios: Vec<RadioOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<u32>,
    #[serde(default)]
    pub col_span: u8,
    #[serde(default)]
    pub col_span_label: u8,
    #[serde(default)]
    pub col_span_control: u8,
    #[serde(default)]
    pub h_align: HAlign,
}

impl Input {
    pub fn is_layout(&self) -> bool {
        self.kind.is_layout()
    }

    pub fn is_reserved_name(&self) -> bool {
        RESERVED_NAMES.contains(&self.name.as_str())
    }

    /// Non-layout inputs carry a respondent answer.
    pub fn has_response(&self) -> bool {
        !self.is_layout()
    }
}
