//! Event dispatcher for TabStash.
//!
//! Routes host browser events to the stash flows:
//! toolbar commands, toolbar validation, popover display and messages
//! posted back by the overview page. Failures are logged and never stop the
//! event loop; the extension has no user-visible error channel.

use serde_json::Value;

use crate::browser::BrowserAdapter;
use crate::managers::stash_manager::{StashManager, StashManagerTrait};
use crate::services::stash_service::{StashService, StashServiceTrait};
use crate::services::toolbar_state::reconcile_toolbar;
use crate::storage::KeyValueStore;
use crate::types::errors::StashError;
use crate::types::message::{Command, HostEvent, OutboundMessage, OverviewMessage};
use crate::types::settings::StashSettings;
use crate::types::toolbar::ToolbarState;
use crate::types::window::BrowserWindow;

/// Owns the store and browser adapter and dispatches events to them.
pub struct Dispatcher<S: KeyValueStore, B: BrowserAdapter> {
    store: S,
    browser: B,
    settings: StashSettings,
}

impl<S: KeyValueStore, B: BrowserAdapter> Dispatcher<S, B> {
    pub fn new(store: S, browser: B, settings: StashSettings) -> Self {
        Self {
            store,
            browser,
            settings,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut B {
        &mut self.browser
    }

    pub fn settings(&self) -> &StashSettings {
        &self.settings
    }

    fn stashes(&self) -> StashManager<'_, S> {
        StashManager::new(&self.store)
    }

    fn service(&mut self) -> StashService<'_, S, B> {
        StashService::new(&self.store, &mut self.browser)
    }

    /// Handles one host event to completion.
    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Command { command, window } => self.handle_command(&command, &window),
            HostEvent::Validate {
                identifier,
                window,
                toolbar,
            } => self.handle_validate(&identifier, window.as_ref(), toolbar.as_ref()),
            HostEvent::Popover => self.handle_popover(),
            HostEvent::Message { origin, data } => self.handle_message(&origin, &data),
        }
    }

    /// Runs a named toolbar command. Unknown names are ignored.
    pub fn handle_command(&mut self, name: &str, window: &BrowserWindow) {
        match Command::from_name(name) {
            Some(command) => self.run_command(command, window),
            None => tracing::debug!(command = name, "ignoring unknown command"),
        }
    }

    pub fn run_command(&mut self, command: Command, window: &BrowserWindow) {
        match command {
            Command::StashAllTabs => {
                if let Err(e) = self.service().stash_all_tabs(window) {
                    tracing::warn!(window_id = %window.id, error = %e, "stash-all-tabs failed");
                }
            }
            Command::OpenOverview => {
                if let Err(e) = self.browser.show_overview(&window.id) {
                    tracing::warn!(window_id = %window.id, error = %e, "open-overview failed");
                }
            }
        }
    }

    /// Recomputes the toolbar item of `window` and applies it unless
    /// `current`, the state the host reports for the item, already matches.
    pub fn handle_validate(
        &mut self,
        identifier: &str,
        window: Option<&BrowserWindow>,
        current: Option<&ToolbarState>,
    ) {
        if identifier != self.settings.toolbar_identifier {
            return;
        }
        let Some(window) = window else {
            tracing::debug!("validate event without a window");
            return;
        };

        let Some(state) = reconcile_toolbar(current, &window.tabs, &self.settings.base_uri) else {
            return;
        };

        match self.browser.apply_toolbar(&window.id, &state) {
            Ok(()) => {
                tracing::trace!(window_id = %window.id, command = state.command.as_str(), "toolbar updated");
            }
            Err(e) => tracing::warn!(window_id = %window.id, error = %e, "failed to apply toolbar"),
        }
    }

    /// Pushes the full stash list to the overview.
    pub fn handle_popover(&mut self) {
        let stashes = match self.stashes().get_all_stashes() {
            Ok(stashes) => stashes,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load stashes for overview");
                return;
            }
        };
        let message = OutboundMessage::UpdateStashes { stashes };
        if let Err(e) = self.browser.post_to_overview(&message) {
            tracing::warn!(error = %e, "failed to post stashes to overview");
        }
    }

    /// Accepts a posted message only from the extension's own origin.
    /// Unknown or malformed messages are ignored.
    pub fn handle_message(&mut self, origin: &str, data: &Value) {
        if origin != self.settings.extension_origin {
            tracing::trace!(origin, "dropping message from foreign origin");
            return;
        }
        let Some(message) = OverviewMessage::from_value(data) else {
            tracing::debug!("ignoring unrecognized overview message");
            return;
        };
        if let Err(e) = self.dispatch_message(message) {
            tracing::warn!(error = %e, "overview message failed");
        }
    }

    /// Runs an overview message against the repository.
    pub fn dispatch_message(&mut self, message: OverviewMessage) -> Result<(), StashError> {
        match message {
            OverviewMessage::RestoreStash { stash_id } => self.service().restore_stash(&stash_id),
            OverviewMessage::RemoveStash { stash_id } => self.stashes().remove_stash(&stash_id),
            OverviewMessage::RestoreTab { stash_id, tab_id } => self
                .service()
                .restore_tab_from_stash(&stash_id, &tab_id)
                .map(|_| ()),
            OverviewMessage::RemoveTab { stash_id, tab_id } => self
                .stashes()
                .remove_tab_from_stash(&stash_id, &tab_id)
                .map(|_| ()),
        }
    }
}
