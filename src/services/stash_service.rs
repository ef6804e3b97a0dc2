//! Stash creation and restoration flows.
//!
//! Sits between the stash repository and the host browser: captures a
//! window's tabs into a new stash, and reopens stashed tabs before removing
//! them from storage.

use chrono::Utc;
use uuid::Uuid;

use crate::browser::BrowserAdapter;
use crate::managers::stash_manager::{StashManager, StashManagerTrait};
use crate::storage::KeyValueStore;
use crate::types::errors::StashError;
use crate::types::stash::{Stash, StashedTab};
use crate::types::window::{BrowserTab, BrowserWindow};

/// Generates an opaque ID: 32 lowercase hex characters from a v4 UUID.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Snapshots a browser tab into a stash entry with a fresh ID.
pub fn tab_data(tab: &BrowserTab) -> StashedTab {
    StashedTab {
        id: generate_id(),
        title: tab.title.clone().unwrap_or_default(),
        url: tab.url.clone().unwrap_or_default(),
    }
}

/// Trait defining stash creation and restoration operations.
pub trait StashServiceTrait {
    fn stash_all_tabs(&mut self, window: &BrowserWindow) -> Result<Stash, StashError>;
    fn restore_stash(&mut self, stash_id: &str) -> Result<(), StashError>;
    fn restore_stash_value(&mut self, stash: Stash) -> Result<(), StashError>;
    fn restore_tab_from_stash(&mut self, stash_id: &str, tab_id: &str) -> Result<Stash, StashError>;
}

/// Stash flows over a store and a browser adapter.
pub struct StashService<'a, S: KeyValueStore + ?Sized, B: BrowserAdapter + ?Sized> {
    stashes: StashManager<'a, S>,
    browser: &'a mut B,
}

impl<'a, S: KeyValueStore + ?Sized, B: BrowserAdapter + ?Sized> StashService<'a, S, B> {
    pub fn new(store: &'a S, browser: &'a mut B) -> Self {
        Self {
            stashes: StashManager::new(store),
            browser,
        }
    }

    fn open_tab(&mut self, tab: &StashedTab) {
        if let Err(e) = self.browser.open_tab(&tab.url) {
            tracing::warn!(tab_id = %tab.id, url = %tab.url, error = %e, "failed to open stashed tab");
        }
    }
}

impl<S: KeyValueStore + ?Sized, B: BrowserAdapter + ?Sized> StashServiceTrait for StashService<'_, S, B> {
    /// Captures every tab with a URL into a new stash, newest tab first,
    /// then closes the window. The window is closed even when nothing was
    /// captured.
    fn stash_all_tabs(&mut self, window: &BrowserWindow) -> Result<Stash, StashError> {
        let tabs: Vec<StashedTab> = window
            .tabs
            .iter()
            .filter(|t| t.has_url())
            .rev()
            .map(tab_data)
            .collect();

        let stash = Stash {
            id: generate_id(),
            tabs,
            created_at: Utc::now(),
        };

        self.stashes.save_stash(&stash)?;
        tracing::info!(stash_id = %stash.id, window_id = %window.id, tabs = stash.tabs.len(), "stashed window");

        if let Err(e) = self.browser.close_window(&window.id) {
            tracing::warn!(window_id = %window.id, error = %e, "failed to close stashed window");
        }
        Ok(stash)
    }

    fn restore_stash(&mut self, stash_id: &str) -> Result<(), StashError> {
        let stash = self.stashes.get_stash(stash_id)?;
        self.restore_stash_value(stash)
    }

    /// Opens every tab in list order, then removes the stash. Tabs that
    /// fail to open are skipped; the stash is removed regardless.
    fn restore_stash_value(&mut self, stash: Stash) -> Result<(), StashError> {
        for tab in &stash.tabs {
            self.open_tab(tab);
        }
        self.stashes.remove_stash_value(&stash)?;
        tracing::info!(stash_id = %stash.id, tabs = stash.tabs.len(), "restored stash");
        Ok(())
    }

    /// Opens one tab and removes it from its stash. An unknown tab ID skips
    /// the open but still re-saves the stash.
    fn restore_tab_from_stash(&mut self, stash_id: &str, tab_id: &str) -> Result<Stash, StashError> {
        let stash = self.stashes.get_stash(stash_id)?;
        match stash.find_tab(tab_id).cloned() {
            Some(tab) => self.open_tab(&tab),
            None => tracing::debug!(stash_id, tab_id, "tab not in stash, nothing to open"),
        }
        self.stashes.remove_tab_from_stash_value(stash, tab_id)
    }
}
