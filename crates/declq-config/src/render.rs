//! Output rendering configuration.

use declq_core::PrintStyle;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Largest accepted indent width.
pub const MAX_INDENT_WIDTH: usize = 16;

const fn default_indent_width() -> usize {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    /// `full` prints bodies; `terse` prints headers only.
    #[serde(default)]
    pub style: PrintStyle,

    /// Spaces per nesting level, 1 through 16.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: PrintStyle::default(),
            indent_width: default_indent_width(),
        }
    }
}

impl RenderConfig {
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when `indent_width` is 0 or above
    /// [`MAX_INDENT_WIDTH`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::InvalidValue {
                field: "render.indent_width".to_string(),
                reason: format!(
                    "must be between 1 and {MAX_INDENT_WIDTH}, got {}",
                    self.indent_width
                ),
            });
        }
        Ok(())
    }
}
