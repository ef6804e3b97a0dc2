//! TabStash: stash every tab of a browser window into a persisted
//! collection and restore tabs or whole stashes later from an overview popover.
//!
//! This library crate exposes all modules for use by the host binary and integration tests.

pub mod app;
pub mod browser;
pub mod database;
pub mod dispatcher;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
