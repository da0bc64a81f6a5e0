//! Sidebar configuration

use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};

/// Viewport width (logical pixels) at or below which the sidebar is forced collapsed.
pub const DEFAULT_BREAKPOINT: u32 = 768;

/// Element ids, class name and breakpoint the controller works with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarConfig {
    pub sidebar_id: String,
    pub body_id: String,
    pub toggle_id: String,
    pub active_class: String,
    pub breakpoint: u32,
    /// Apply the layout for the current width once, right after attaching
    pub sync_on_attach: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            sidebar_id: "sidebar".to_string(),
            body_id: "body".to_string(),
            toggle_id: "sidebarCollapse".to_string(),
            active_class: "active".to_string(),
            breakpoint: DEFAULT_BREAKPOINT,
            sync_on_attach: false,
        }
    }
}

impl SidebarConfig {
    /// Parse a (possibly partial) JSON config; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> ShellResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ShellResult<()> {
        for (field, id) in [
            ("sidebarId", &self.sidebar_id),
            ("bodyId", &self.body_id),
            ("toggleId", &self.toggle_id),
        ] {
            if id.trim().is_empty() {
                return Err(ShellError::InvalidConfig(format!("{field} must not be empty")));
            }
        }

        if self.active_class.is_empty() {
            return Err(ShellError::InvalidConfig("activeClass must not be empty".into()));
        }
        // DOMTokenList rejects tokens containing ASCII whitespace
        if self.active_class.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(ShellError::InvalidConfig(format!(
                "activeClass '{}' must be a single class token",
                self.active_class
            )));
        }

        if self.breakpoint == 0 {
            return Err(ShellError::InvalidConfig("breakpoint must be greater than zero".into()));
        }

        Ok(())
    }
}
