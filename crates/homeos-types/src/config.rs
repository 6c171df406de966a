//! Session configuration.
//!
//! Loaded once at terminal-open time from an optional `homeos.toml`; every
//! field has a default so a missing or partial file is fine.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for one terminal session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Logged-in user name (immutable for the session lifetime).
    pub username: String,
    /// Host name shown in the prompt.
    pub hostname: String,
    /// Shell name used in the "command not found" diagnostic.
    pub shell_name: String,
    /// Banner printed when the terminal opens.
    pub welcome: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            username: "user".to_string(),
            hostname: "homeos".to_string(),
            shell_name: "bash".to_string(),
            welcome: "Welcome to HomeOS Terminal. Type 'help' for a list of commands."
                .to_string(),
        }
    }
}

impl HomeConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
