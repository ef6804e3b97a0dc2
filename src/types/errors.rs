use thiserror::Error;

// === StoreError ===

/// Errors raised by a key/value store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The SQLite backend rejected a read or write.
    #[error("Store database error: {0}")]
    Database(String),
    /// The backing file could not be created or opened.
    #[error("Store I/O error: {0}")]
    Io(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

// === StashError ===

/// Errors related to stash repository operations.
#[derive(Debug, Error)]
pub enum StashError {
    /// No record exists for the given stash ID.
    #[error("Stash not found: {0}")]
    NotFound(String),
    /// A stored value did not parse as the expected JSON shape.
    #[error("Malformed stash data: {0}")]
    Malformed(String),
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// === BrowserError ===

/// Errors reported by the host browser adapter.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// A tab could not be opened.
    #[error("Failed to open tab: {0}")]
    OpenTab(String),
    /// A window could not be closed.
    #[error("Failed to close window: {0}")]
    CloseWindow(String),
    /// The channel to the host shell is gone.
    #[error("Browser channel error: {0}")]
    Channel(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    Io(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    Serialization(String),
}

// === LogError ===

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("failed to set global subscriber: {0}")]
    SetSubscriber(String),
}
