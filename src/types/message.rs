use serde::{Deserialize, Serialize};

use super::stash::Stash;
use super::toolbar::ToolbarState;
use super::window::BrowserWindow;

/// Named toolbar commands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    StashAllTabs,
    OpenOverview,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::StashAllTabs => "stash-all-tabs",
            Command::OpenOverview => "open-overview",
        }
    }

    /// Resolves a command name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "stash-all-tabs" => Some(Command::StashAllTabs),
            "open-overview" => Some(Command::OpenOverview),
            _ => None,
        }
    }
}

/// Messages the overview popover posts back to the extension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum OverviewMessage {
    RestoreStash { stash_id: String },
    RemoveStash { stash_id: String },
    RestoreTab { stash_id: String, tab_id: String },
    RemoveTab { stash_id: String, tab_id: String },
}

impl OverviewMessage {
    /// Parses a posted payload. Unknown `type` values and malformed
    /// payloads yield `None`.
    pub fn from_value(data: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(data.clone()).ok()
    }
}

/// Messages the extension pushes to the overview popover.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundMessage {
    UpdateStashes { stashes: Vec<Stash> },
}

/// Events delivered by the browser shell to the extension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum HostEvent {
    /// A toolbar command fired in `window`.
    Command {
        command: String,
        window: BrowserWindow,
    },
    /// The browser is asking a toolbar item to revalidate itself. Fires on
    /// every tab load.
    Validate {
        identifier: String,
        #[serde(default)]
        window: Option<BrowserWindow>,
        /// The item's state as currently shown by the host, if reported.
        #[serde(default)]
        toolbar: Option<ToolbarState>,
    },
    /// The overview popover is about to be shown.
    Popover,
    /// A message posted from an extension page.
    Message {
        origin: String,
        data: serde_json::Value,
    },
}
