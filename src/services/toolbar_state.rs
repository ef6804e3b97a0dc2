//! Toolbar state reducer.
//!
//! Derives the toolbar item's command, image and tooltip from a window's
//! tabs. Validation fires on every tab load, so [`reconcile_toolbar`] returns
//! `None` whenever the current state already matches.

use crate::types::message::Command;
use crate::types::toolbar::{
    ToolbarState, OVERVIEW_IMAGE, OVERVIEW_TOOLTIP, STASH_IMAGE, STASH_TOOLTIP,
};
use crate::types::window::BrowserTab;

/// Returns true if any tab has a non-empty URL.
pub fn can_stash(tabs: &[BrowserTab]) -> bool {
    tabs.iter().any(BrowserTab::has_url)
}

/// Builds the toolbar state for a window's tabs.
pub fn toolbar_state_for(tabs: &[BrowserTab], base_uri: &str) -> ToolbarState {
    if can_stash(tabs) {
        ToolbarState {
            command: Command::StashAllTabs,
            image: format!("{}{}", base_uri, STASH_IMAGE),
            tooltip: STASH_TOOLTIP.to_string(),
            can_stash: true,
        }
    } else {
        ToolbarState {
            command: Command::OpenOverview,
            image: format!("{}{}", base_uri, OVERVIEW_IMAGE),
            tooltip: OVERVIEW_TOOLTIP.to_string(),
            can_stash: false,
        }
    }
}

/// Returns the new toolbar state, or `None` if `current` needs no change.
pub fn reconcile_toolbar(
    current: Option<&ToolbarState>,
    tabs: &[BrowserTab],
    base_uri: &str,
) -> Option<ToolbarState> {
    let stashable = can_stash(tabs);
    if current.is_some_and(|c| c.can_stash == stashable) {
        return None;
    }
    Some(toolbar_state_for(tabs, base_uri))
}
