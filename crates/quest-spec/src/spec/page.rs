use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::i18n::LocalizedText;
use crate::spec::group::Group;

/// One screen of the questionnaire: an ordered sequence of groups plus
/// navigation metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Page {
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub section: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub label: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub desc: LocalizedText,
    /// Short label for progress bars and menus.
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub short: LocalizedText,
    /// Percent of the viewport width; 0 is normalized to 100.
    #[serde(default)]
    pub width: u16,
    /// Pages flagged here never appear in prev/next controls or the progress
    /// bar, regardless of any predicate.
    #[serde(default)]
    pub no_navigation: bool,
    /// 1-based sequential position among navigable pages; computed by the
    /// normalization pass, 0 for non-navigable pages.
    #[serde(default)]
    pub navigational_num: u32,
    /// Name of a registered navigation predicate deciding per-respondent
    /// visibility of this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_func: Option<String>,
    /// Page-level cross-field check; invoked by the render layer, opaque here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_func: Option<String>,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub validation_msg: LocalizedText,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Page {
    /// Appends a fresh group and returns it for configuration.
    pub fn add_group(&mut self) -> &mut Group {
        self.groups.push(Group::default());
        self.groups.last_mut().expect("just pushed")
    }
}
