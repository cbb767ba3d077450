//! Path configuration for templates.

use crate::error::{TemplateError, TemplateResult};
use serde::{Deserialize, Serialize};

/// Configuration for the textual path form of a template.
///
/// The separator is placed before every rendered segment and is what
/// [`Template::matches_path`](crate::Template::matches_path) splits on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Segment separator. Defaults to "/".
    pub separator: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            separator: "/".to_string(),
        }
    }
}

impl PathConfig {
    /// Create a validated configuration with the given separator.
    pub fn new(separator: impl Into<String>) -> TemplateResult<Self> {
        let config = Self {
            separator: separator.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> TemplateResult<()> {
        if self.separator.is_empty() {
            return Err(TemplateError::invalid_argument("Separator cannot be empty"));
        }
        Ok(())
    }
}
