use serde::{Deserialize, Serialize};

use super::message::Command;

pub const STASH_IMAGE: &str = "toolbar-in.png";
pub const OVERVIEW_IMAGE: &str = "toolbar-out.png";
pub const STASH_TOOLTIP: &str = "Stash all tabs";
pub const OVERVIEW_TOOLTIP: &str = "Open stash overview";

/// Desired presentation of a window's toolbar item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarState {
    pub command: Command,
    pub image: String,
    pub tooltip: String,
    pub can_stash: bool,
}
