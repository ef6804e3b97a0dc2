// TabStash Settings Engine
// Loads and saves the extension host settings.
// Settings are stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform::{self, AppDir};
use crate::types::errors::SettingsError;
use crate::types::settings::StashSettings;

/// File name of the SQLite store inside the data directory.
pub const DATABASE_FILE: &str = "tabstash.db";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<StashSettings, SettingsError>;
    fn load_or_init(&mut self) -> Result<&StashSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &StashSettings;
    fn get_config_path(&self) -> &str;
    fn database_path(&self) -> PathBuf;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: StashSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::app_dir(AppDir::Config)
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: StashSettings::default(),
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a serialization error.
    fn load(&mut self) -> Result<StashSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            tracing::debug!(path = %self.config_path, "no settings file, using defaults");
            self.settings = StashSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::Io(format!("Failed to read config file: {}", e)))?;

        let settings: StashSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::Serialization(format!("Failed to parse config file: {}", e))
        })?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Loads settings, writing a default settings file on first start so
    /// there is something to edit.
    fn load_or_init(&mut self) -> Result<&StashSettings, SettingsError> {
        let first_start = !Path::new(&self.config_path).exists();
        self.load()?;
        if first_start {
            self.save()?;
            tracing::info!(path = %self.config_path, "wrote default settings");
        }
        Ok(&self.settings)
    }

    /// Saves the current settings to the JSON config file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::Io(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::Serialization(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::Io(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn get_settings(&self) -> &StashSettings {
        &self.settings
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }

    /// The configured database path, or `tabstash.db` in the platform data directory.
    fn database_path(&self) -> PathBuf {
        match &self.settings.database_path {
            Some(p) => PathBuf::from(p),
            None => platform::app_dir(AppDir::Data).join(DATABASE_FILE),
        }
    }
}
