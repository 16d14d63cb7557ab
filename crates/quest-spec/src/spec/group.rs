use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::i18n::LocalizedText;
use crate::spec::input::Input;

/// An ordered block of inputs rendered together on a page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Group {
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub label: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub desc: LocalizedText,
    /// Percent of the page width; 0 is normalized to 100.
    #[serde(default)]
    pub width: u16,
    /// Grid columns the group's inputs are laid out in; opaque to the engine.
    #[serde(default)]
    pub cols: u8,
    #[serde(default)]
    pub inputs: Vec<Input>,
}

impl Group {
    /// Appends a fresh input and returns it for configuration.
    pub fn add_input(&mut self) -> &mut Input {
        self.inputs.push(Input::default());
        self.inputs.last_mut().expect("just pushed")
    }
}
