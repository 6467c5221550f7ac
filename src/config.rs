//! Widget Configuration
//!
//! Optional JSON block in the host page; every field has a default.
//!
//! ```html
//! <script type="application/json" id="todo-config">
//!   { "container_id": "container", "log_level": "debug", "todos": ["buy milk"] }
//! </script>
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Id of the element holding the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Id of the mount element, reused if present, created otherwise
    pub container_id: String,
    /// `log` level name (error, warn, info, debug, trace)
    pub log_level: String,
    /// Return focus to the text input after adding an item
    pub focus_after_add: bool,
    /// Items shown on first render
    pub todos: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_id: "container".to_string(),
            log_level: "info".to_string(),
            focus_after_add: true,
            todos: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Config {
    /// Parse a JSON object; blank input yields the defaults
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the page's config block, if any
    pub fn load() -> Result<Self, ConfigError> {
        match config_source() {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    /// Parsed log level, `Info` when unrecognised
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn config_source() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}
