//! Widget configuration
//!
//! Element IDs and class names default to the markup the widget was written
//! against, so `WidgetConfig::default()` binds a stock page unchanged.

use serde::{Deserialize, Serialize};

use crate::core::{VoteDirection, VoteResult};

/// What a click on a button carrying the disabled marker does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisabledPolicy {
    /// The marker is styling only; the click still toggles
    #[default]
    Cosmetic,
    /// Clicks on a disabled button are ignored
    Enforced,
}

impl DisabledPolicy {
    /// Check if disabled buttons reject clicks
    #[must_use]
    pub const fn is_enforced(self) -> bool {
        matches!(self, Self::Enforced)
    }
}

/// Filled/outline icon class pair for one button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconClasses {
    /// Class shown while voted
    pub filled: String,
    /// Class shown while not voted
    pub outline: String,
}

impl IconClasses {
    /// Creates an icon class pair
    #[must_use]
    pub fn new(filled: impl Into<String>, outline: impl Into<String>) -> Self {
        Self {
            filled: filled.into(),
            outline: outline.into(),
        }
    }
}

/// IDs of the four bound elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// Up-vote button
    pub up_button: String,
    /// Down-vote button
    pub down_button: String,
    /// Up-vote count display
    pub up_count: String,
    /// Down-vote count display
    pub down_count: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            up_button: "thumbs_up".to_string(),
            down_button: "thumbs_down".to_string(),
            up_count: "up_votes_count".to_string(),
            down_count: "down_votes_count".to_string(),
        }
    }
}

impl ElementIds {
    /// Button ID for a direction
    #[must_use]
    pub fn button(&self, direction: VoteDirection) -> &str {
        match direction {
            VoteDirection::Up => &self.up_button,
            VoteDirection::Down => &self.down_button,
        }
    }

    /// Count display ID for a direction
    #[must_use]
    pub fn count(&self, direction: VoteDirection) -> &str {
        match direction {
            VoteDirection::Up => &self.up_count,
            VoteDirection::Down => &self.down_count,
        }
    }
}

/// Vote widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Bound element IDs
    pub ids: ElementIds,
    /// Up button icon classes
    pub up_icon: IconClasses,
    /// Down button icon classes
    pub down_icon: IconClasses,
    /// Marker added to the opposite button while a vote is cast
    pub disabled_class: String,
    /// Whether the marker also blocks clicks
    pub disabled_policy: DisabledPolicy,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            up_icon: IconClasses::new("fa-thumbs-up", "fa-thumbs-o-up"),
            down_icon: IconClasses::new("fa-thumbs-down", "fa-thumbs-o-down"),
            disabled_class: "disabled".to_string(),
            disabled_policy: DisabledPolicy::Cosmetic,
        }
    }
}

impl WidgetConfig {
    /// Create a default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a config from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> VoteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the disabled policy
    #[must_use]
    pub fn with_disabled_policy(mut self, policy: DisabledPolicy) -> Self {
        self.disabled_policy = policy;
        self
    }

    /// Set the bound element IDs
    #[must_use]
    pub fn with_ids(mut self, ids: ElementIds) -> Self {
        self.ids = ids;
        self
    }

    /// Set the disabled marker class
    #[must_use]
    pub fn with_disabled_class(mut self, class: impl Into<String>) -> Self {
        self.disabled_class = class.into();
        self
    }

    /// Icon classes for a direction
    #[must_use]
    pub fn icon(&self, direction: VoteDirection) -> &IconClasses {
        match direction {
            VoteDirection::Up => &self.up_icon,
            VoteDirection::Down => &self.down_icon,
        }
    }
}
