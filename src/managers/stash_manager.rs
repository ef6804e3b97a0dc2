//! Stash Manager for TabStash.
//!
//! Owns the encoding of stashes into key/value entries and the separate,
//! newest-first index of stash IDs. Nothing else writes these keys.
//!
//! Record and index are written as separate keys with no transaction, so a
//! crash between the two writes can leave an orphan record or a dangling
//! index entry.

use crate::storage::KeyValueStore;
use crate::types::errors::StashError;
use crate::types::stash::Stash;

/// Key holding the JSON array of stash IDs, newest first.
pub const STASHES_KEY: &str = "stashes";
/// Prefix of the key holding each serialized stash.
pub const STASH_PREFIX: &str = "stash:";

/// Returns the storage key for a stash ID.
pub fn stash_key(id: &str) -> String {
    format!("{}{}", STASH_PREFIX, id)
}

/// Trait defining stash repository operations.
pub trait StashManagerTrait {
    fn save_stash(&self, stash: &Stash) -> Result<(), StashError>;
    fn get_stash(&self, id: &str) -> Result<Stash, StashError>;
    fn remove_stash(&self, id: &str) -> Result<(), StashError>;
    fn remove_stash_value(&self, stash: &Stash) -> Result<(), StashError>;
    fn remove_tab_from_stash(&self, stash_id: &str, tab_id: &str) -> Result<Stash, StashError>;
    fn remove_tab_from_stash_value(&self, stash: Stash, tab_id: &str) -> Result<Stash, StashError>;
    fn get_all_stash_ids(&self) -> Result<Vec<String>, StashError>;
    fn get_all_stashes(&self) -> Result<Vec<Stash>, StashError>;
}

/// Stash repository over any key/value store.
pub struct StashManager<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> StashManager<'a, S> {
    /// Creates a new `StashManager` using the provided store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn write_ids(&self, ids: &[String]) -> Result<(), StashError> {
        let json =
            serde_json::to_string(ids).map_err(|e| StashError::Malformed(e.to_string()))?;
        self.store.set(STASHES_KEY, &json)?;
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> StashManagerTrait for StashManager<'_, S> {
    /// Writes the stash record, then prepends its ID to the index if new.
    /// Re-saving an indexed stash never reorders the index.
    fn save_stash(&self, stash: &Stash) -> Result<(), StashError> {
        let json =
            serde_json::to_string(stash).map_err(|e| StashError::Malformed(e.to_string()))?;
        self.store.set(&stash_key(&stash.id), &json)?;

        let mut ids = self.get_all_stash_ids()?;
        if !ids.iter().any(|id| *id == stash.id) {
            ids.insert(0, stash.id.clone());
            self.write_ids(&ids)?;
            tracing::debug!(stash_id = %stash.id, tabs = stash.tabs.len(), "indexed new stash");
        }
        Ok(())
    }

    fn get_stash(&self, id: &str) -> Result<Stash, StashError> {
        let raw = self
            .store
            .get(&stash_key(id))?
            .ok_or_else(|| StashError::NotFound(id.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| StashError::Malformed(format!("{}: {}", id, e)))
    }

    /// Deletes the record and drops the ID from the index if present.
    fn remove_stash(&self, id: &str) -> Result<(), StashError> {
        let mut ids = self.get_all_stash_ids()?;
        if let Some(pos) = ids.iter().position(|i| i == id) {
            ids.remove(pos);
            self.write_ids(&ids)?;
        }
        self.store.remove(&stash_key(id))?;
        tracing::debug!(stash_id = %id, "removed stash");
        Ok(())
    }

    fn remove_stash_value(&self, stash: &Stash) -> Result<(), StashError> {
        self.remove_stash(&stash.id)
    }

    fn remove_tab_from_stash(&self, stash_id: &str, tab_id: &str) -> Result<Stash, StashError> {
        let stash = self.get_stash(stash_id)?;
        self.remove_tab_from_stash_value(stash, tab_id)
    }

    /// Filters the tab out and re-saves. A stash left with no tabs is kept.
    fn remove_tab_from_stash_value(&self, mut stash: Stash, tab_id: &str) -> Result<Stash, StashError> {
        stash.tabs.retain(|t| t.id != tab_id);
        self.save_stash(&stash)?;
        Ok(stash)
    }

    fn get_all_stash_ids(&self) -> Result<Vec<String>, StashError> {
        match self.store.get(STASHES_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| StashError::Malformed(format!("{}: {}", STASHES_KEY, e))),
            None => Ok(Vec::new()),
        }
    }

    /// Loads every indexed stash in index order. Index entries whose record
    /// is missing are skipped; malformed records fail the listing.
    fn get_all_stashes(&self) -> Result<Vec<Stash>, StashError> {
        let mut stashes = Vec::new();
        for id in self.get_all_stash_ids()? {
            match self.get_stash(&id) {
                Ok(stash) => stashes.push(stash),
                Err(StashError::NotFound(missing)) => {
                    tracing::warn!(stash_id = %missing, "index entry has no stash record, skipping");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(stashes)
    }
}
