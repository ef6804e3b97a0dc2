//! App Core for TabStash.
//!
//! Loads settings, installs logging, opens the persistent store and wires
//! the dispatcher to a browser adapter.

use crate::browser::BrowserAdapter;
use crate::database::connection::Database;
use crate::dispatcher::Dispatcher;
use crate::logging;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::message::HostEvent;

/// Central application struct.
pub struct App<B: BrowserAdapter> {
    pub settings_engine: SettingsEngine,
    pub dispatcher: Dispatcher<Database, B>,
}

impl<B: BrowserAdapter> App<B> {
    /// Startup sequence: load (or write default) settings, install logging,
    /// open the database.
    ///
    /// `config_path` overrides the platform settings file location.
    pub fn new(config_path: Option<String>, browser: B) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load_or_init()?;
        let settings = settings_engine.get_settings().clone();
        logging::init_logging(&settings.log_level)?;

        let db_path = settings_engine.database_path();
        let db = Database::open(&db_path)?;
        tracing::info!(
            config = settings_engine.get_config_path(),
            database = %db_path.display(),
            "tabstash started"
        );

        Ok(Self {
            settings_engine,
            dispatcher: Dispatcher::new(db, browser, settings),
        })
    }

    /// Parses one NDJSON event line and dispatches it.
    ///
    /// Blank lines are ignored. Returns an error message for lines that are
    /// not a valid host event.
    pub fn handle_line(&mut self, line: &str) -> Result<(), String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }
        let event: HostEvent =
            serde_json::from_str(line).map_err(|e| format!("parse error: {}", e))?;
        self.dispatcher.handle_event(event);
        Ok(())
    }
}
