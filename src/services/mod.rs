// TabStash services
// Services implement the extension's flows: stashing and restoring, toolbar state, settings.

pub mod settings_engine;
pub mod stash_service;
pub mod toolbar_state;
