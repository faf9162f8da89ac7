use crate::error::GalleryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, unique item identifier supplied by the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_owned())
    }
}

/// One gallery entry. Owned by the host; the gallery only reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: ItemId,
    #[serde(default)]
    pub artwork: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Items that cannot be picked up yet are drawn with a "COMING SOON" veil.
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl GalleryItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: ItemId(id.into()),
            artwork: None,
            title: None,
            available: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Text for the hover label: the title, or the id when untitled.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(self.id.as_str())
    }
}

/// Parse the host's item list from JSON.
pub fn parse_items(json: &str) -> Result<Vec<GalleryItem>, GalleryError> {
    serde_json::from_str(json).map_err(GalleryError::Items)
}
