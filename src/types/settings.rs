use serde::{Deserialize, Serialize};

/// Runtime settings for the stash extension host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StashSettings {
    /// Origin of the extension's own pages. Messages from any other origin
    /// are dropped.
    pub extension_origin: String,
    /// Base URI prepended to toolbar image names.
    pub base_uri: String,
    /// Identifier of the toolbar item that validate events must target.
    pub toolbar_identifier: String,
    /// SQLite file backing the key/value store. `None` selects the
    /// platform data directory.
    pub database_path: Option<String>,
    /// Log level filter; `RUST_LOG` takes precedence.
    pub log_level: String,
}

impl Default for StashSettings {
    fn default() -> Self {
        Self {
            extension_origin: "safari-extension://com.tabstash.extension".to_string(),
            base_uri: "safari-extension://com.tabstash.extension/".to_string(),
            toolbar_identifier: "toolbar".to_string(),
            database_path: None,
            log_level: "info".to_string(),
        }
    }
}
