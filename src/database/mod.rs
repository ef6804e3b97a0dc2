//! TabStash database layer.
//!
//! Provides the SQLite-backed key/value store and its schema migrations.
//!
//! # Usage
//!
//! ```no_run
//! use tabstash::database::Database;
//! use tabstash::storage::KeyValueStore;
//!
//! let db = Database::open("tabstash.db").expect("failed to open database");
//! db.set("stashes", "[]").expect("write failed");
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
