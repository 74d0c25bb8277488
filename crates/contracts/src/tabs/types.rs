use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a tab strip. Identity is `id`; order in the list is
/// display and navigation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabDescriptor {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<BadgeContent>,
}

impl TabDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
            badge: None,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn with_badge(mut self, badge: impl Into<BadgeContent>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Badge to render, if any. Empty text badges count as absent.
    pub fn visible_badge(&self) -> Option<&BadgeContent> {
        self.badge.as_ref().filter(|badge| !badge.is_empty())
    }
}

/// Short text or number shown next to a tab label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BadgeContent {
    Number(i64),
    Text(String),
}

impl BadgeContent {
    pub fn is_empty(&self) -> bool {
        matches!(self, BadgeContent::Text(text) if text.is_empty())
    }
}

impl fmt::Display for BadgeContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeContent::Number(n) => write!(f, "{}", n),
            BadgeContent::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for BadgeContent {
    fn from(value: &str) -> Self {
        BadgeContent::Text(value.to_string())
    }
}

impl From<String> for BadgeContent {
    fn from(value: String) -> Self {
        BadgeContent::Text(value)
    }
}

impl From<i64> for BadgeContent {
    fn from(value: i64) -> Self {
        BadgeContent::Number(value)
    }
}

/// Visual style of the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabVariant {
    #[default]
    Pill,
    Underline,
}

impl TabVariant {
    /// Returns the variant name as used in CSS modifiers and test ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            TabVariant::Pill => "pill",
            TabVariant::Underline => "underline",
        }
    }

    /// Only the underline variant renders a sliding indicator.
    pub fn has_indicator(&self) -> bool {
        matches!(self, TabVariant::Underline)
    }
}

/// Visual treatment applied to every badge of one tab set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Positive => "positive",
            BadgeVariant::Negative => "negative",
        }
    }
}
