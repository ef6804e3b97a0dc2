use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tab captured into a stash. `title` and `url` are snapshots taken at
/// stash time and are never refreshed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StashedTab {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// A named collection of tabs, stored newest-first in the stash index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stash {
    pub id: String,
    pub tabs: Vec<StashedTab>,
    pub created_at: DateTime<Utc>,
}

impl Stash {
    /// Finds the first tab with the given ID.
    pub fn find_tab(&self, tab_id: &str) -> Option<&StashedTab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }
}
