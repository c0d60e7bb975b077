//! Configuration for the layout engine and layout documents

use serde::Deserialize;

use super::constraint::Priority;

/// Configuration options for layout computation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Spacing between siblings when a row or column does not give one
    pub spacing: f64,

    /// Margin for edge rules that do not give one
    pub margin: f64,

    /// Priority of frames pinned with `LayoutEngine::set_frame`; must be
    /// below required
    pub frame_priority: Priority,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: 8.0,
            margin: 16.0,
            frame_priority: Priority::MAX_OPTIONAL,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML; missing keys keep their defaults.
    /// A required frame priority is lowered to [`Priority::MAX_OPTIONAL`].
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(content)?;
        let frame_priority = config.frame_priority;
        Ok(config.with_frame_priority(frame_priority))
    }

    /// Set the default sibling spacing
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the default edge margin
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the frame priority, lowered below required if needed
    pub fn with_frame_priority(mut self, priority: Priority) -> Self {
        self.frame_priority = priority.below_required();
        self
    }
}
