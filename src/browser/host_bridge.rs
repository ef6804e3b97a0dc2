//! Newline-delimited JSON bridge to the browser shell.
//!
//! Each browser operation is written as one JSON object per line, e.g.
//! `{"action":"openTab","url":"https://example.com"}`.

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::BrowserAdapter;
use crate::types::errors::BrowserError;
use crate::types::message::OutboundMessage;
use crate::types::toolbar::ToolbarState;

/// Actions emitted to the browser shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum HostAction {
    Ready { version: String },
    OpenTab { url: String },
    CloseWindow { window_id: String },
    ShowPopover { window_id: String },
    PostMessage { message: OutboundMessage },
    SetToolbar { window_id: String, toolbar: ToolbarState },
    Error { error: String },
}

/// [`BrowserAdapter`] that writes [`HostAction`] lines to a writer.
pub struct HostBridge<W: Write> {
    out: W,
}

impl<W: Write> HostBridge<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes one action line and flushes.
    pub fn emit(&mut self, action: &HostAction) -> Result<(), BrowserError> {
        let line =
            serde_json::to_string(action).map_err(|e| BrowserError::Channel(e.to_string()))?;
        writeln!(self.out, "{}", line).map_err(|e| BrowserError::Channel(e.to_string()))?;
        self.out
            .flush()
            .map_err(|e| BrowserError::Channel(e.to_string()))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BrowserAdapter for HostBridge<W> {
    fn open_tab(&mut self, url: &str) -> Result<(), BrowserError> {
        self.emit(&HostAction::OpenTab {
            url: url.to_string(),
        })
        .map_err(|e| BrowserError::OpenTab(e.to_string()))
    }

    fn close_window(&mut self, window_id: &str) -> Result<(), BrowserError> {
        self.emit(&HostAction::CloseWindow {
            window_id: window_id.to_string(),
        })
        .map_err(|e| BrowserError::CloseWindow(e.to_string()))
    }

    fn show_overview(&mut self, window_id: &str) -> Result<(), BrowserError> {
        self.emit(&HostAction::ShowPopover {
            window_id: window_id.to_string(),
        })
    }

    fn post_to_overview(&mut self, message: &OutboundMessage) -> Result<(), BrowserError> {
        self.emit(&HostAction::PostMessage {
            message: message.clone(),
        })
    }

    fn apply_toolbar(&mut self, window_id: &str, state: &ToolbarState) -> Result<(), BrowserError> {
        self.emit(&HostAction::SetToolbar {
            window_id: window_id.to_string(),
            toolbar: state.clone(),
        })
    }
}
