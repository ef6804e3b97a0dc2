//! Host browser adapter.
//!
//! The extension never touches browser windows directly; it asks a
//! [`BrowserAdapter`] to open tabs, close windows, show the overview popover,
//! push messages to it, and apply toolbar state.

pub mod host_bridge;

pub use host_bridge::{HostAction, HostBridge};

use crate::types::errors::BrowserError;
use crate::types::message::OutboundMessage;
use crate::types::toolbar::ToolbarState;

/// Operations the extension needs from the host browser.
pub trait BrowserAdapter {
    /// Opens a new tab at `url` in the active window.
    fn open_tab(&mut self, url: &str) -> Result<(), BrowserError>;
    fn close_window(&mut self, window_id: &str) -> Result<(), BrowserError>;
    /// Shows the overview popover attached to the toolbar item of `window_id`.
    fn show_overview(&mut self, window_id: &str) -> Result<(), BrowserError>;
    fn post_to_overview(&mut self, message: &OutboundMessage) -> Result<(), BrowserError>;
    fn apply_toolbar(&mut self, window_id: &str, state: &ToolbarState) -> Result<(), BrowserError>;
}
