//! Schema of the demo page configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::tabs::{BadgeVariant, TabDescriptor, TabVariant};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub title: String,
    pub sections: Vec<DemoSection>,
}

/// One showcase block with its own tab set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSection {
    pub key: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tab_variant: TabVariant,
    #[serde(default)]
    pub tab_badge: BadgeVariant,
    /// Drive the section in controlled mode, starting from this tab.
    #[serde(default)]
    pub controlled_start: Option<String>,
    pub tabs: Vec<TabDescriptor>,
    #[serde(default)]
    pub panels: Vec<DemoPanel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoPanel {
    pub id: String,
    pub heading: String,
    pub text: String,
    /// Extra CSS class of the panel element
    #[serde(default)]
    pub class: Option<String>,
}

impl DemoConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: DemoConfig =
            serde_json::from_str(json).context("Failed to parse demo configuration")?;
        for section in &config.sections {
            section
                .check_panels()
                .with_context(|| format!("Invalid demo section '{}'", section.key))?;
        }
        Ok(config)
    }
}

impl DemoSection {
    fn check_panels(&self) -> anyhow::Result<()> {
        for panel in &self.panels {
            if !self.tabs.iter().any(|tab| tab.id == panel.id) {
                anyhow::bail!("panel '{}' has no matching tab", panel.id);
            }
        }
        Ok(())
    }
}
