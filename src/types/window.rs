use serde::{Deserialize, Serialize};

/// A tab as reported by the host browser. Blank and new-tab placeholders
/// arrive without a URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrowserTab {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl BrowserTab {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            url: Some(url.to_string()),
        }
    }

    /// Returns true if the tab has a non-empty URL and can be stashed.
    pub fn has_url(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// A browser window and its tabs in left-to-right order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrowserWindow {
    pub id: String,
    #[serde(default)]
    pub tabs: Vec<BrowserTab>,
}
