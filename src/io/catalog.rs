//! Item catalog boundary and its file-backed implementation

use crate::io::error::{EngineError, Result, WithPath};
use crate::math::color::HexColor;
use crate::wardrobe::{ClothingItem, ItemId, SlotType};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Caller identity threaded explicitly into every collaborator call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialContext {
    token: Option<String>,
    owner: Option<String>,
}

impl CredentialContext {
    /// Context without any credential
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Attach a bearer token; blank tokens are ignored
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.trim().is_empty()).then_some(token);
        self
    }

    /// Restrict catalog reads to one owner
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Owner filter, if any
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

/// Source of catalog snapshots
pub trait ItemCatalog {
    /// Fetch every item visible to the caller, in catalog order
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Connectivity`] if the catalog cannot be reached,
    /// or [`EngineError::CatalogFormat`] if its contents cannot be read.
    fn fetch_items(&self, credentials: &CredentialContext) -> Result<Vec<ClothingItem>>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRecord {
    id: u64,
    #[serde(default)]
    item_type: Option<String>,
    #[serde(default)]
    vibes: Option<Value>,
    #[serde(default)]
    color: Option<Value>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    owner: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<Value>),
    Wrapped { items: Vec<Value> },
}

impl CatalogRecord {
    fn visible_to(&self, credentials: &CredentialContext) -> bool {
        match (credentials.owner(), self.owner.as_deref()) {
            (Some(wanted), Some(owner)) => wanted == owner,
            _ => true,
        }
    }

    fn into_item(self) -> Option<ClothingItem> {
        let Some(slot) = self.item_type.as_deref().and_then(SlotType::from_name) else {
            warn!(id = self.id, item_type = ?self.item_type, "skipping item without a known slot");
            return None;
        };

        let color = match &self.color {
            Some(Value::String(raw)) => HexColor::parse(raw),
            _ => HexColor::unknown(),
        };
        if color.is_unknown() {
            debug!(id = self.id, color = ?self.color, "item color treated as unknown");
        }

        Some(ClothingItem {
            id: ItemId(self.id),
            slot,
            vibes: vibe_tags(self.id, self.vibes),
            color,
            image_ref: self.image_url.unwrap_or_default(),
        })
    }
}

/// Non-empty string tags of a record; anything else is dropped
fn vibe_tags(id: u64, raw: Option<Value>) -> BTreeSet<String> {
    let values = match raw {
        None | Some(Value::Null) => return BTreeSet::new(),
        Some(Value::Array(values)) => values,
        Some(Value::String(single)) => vec![Value::String(single)],
        Some(other) => {
            debug!(id, vibes = %other, "item vibes are not a list");
            return BTreeSet::new();
        }
    };

    let total = values.len();
    let tags: BTreeSet<String> = values
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();
    let strings = values.iter().filter(|value| value.is_string()).count();
    if strings < total {
        debug!(id, dropped = total - strings, "non-string vibe tags ignored");
    }
    tags
}

/// Parse a catalog document
///
/// Accepts a bare array of records or `{"items": [...]}`. Records that cannot
/// be read or have no known slot are skipped, unusable colors become unknown,
/// and non-string vibe tags are ignored.
///
/// # Errors
///
/// Returns [`EngineError::CatalogFormat`] if the document does not match
/// either shape.
pub fn items_from_json(
    json: &str,
    origin: &Path,
    credentials: &CredentialContext,
) -> Result<Vec<ClothingItem>> {
    let document: CatalogDocument =
        serde_json::from_str(json).map_err(|source| EngineError::CatalogFormat {
            path: origin.to_path_buf(),
            source,
        })?;

    let records = match document {
        CatalogDocument::Bare(records) | CatalogDocument::Wrapped { items: records } => records,
    };

    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(position, raw)| match serde_json::from_value::<CatalogRecord>(raw) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!(position, %error, "skipping unreadable catalog record");
                None
            }
        })
        .filter(|record| record.visible_to(credentials))
        .filter_map(CatalogRecord::into_item)
        .collect())
}

/// Catalog stored as a JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    /// Catalog backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the document
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemCatalog for JsonFileCatalog {
    fn fetch_items(&self, credentials: &CredentialContext) -> Result<Vec<ClothingItem>> {
        let json = std::fs::read_to_string(&self.path).with_endpoint(&self.path)?;
        let items = items_from_json(&json, &self.path, credentials)?;
        debug!(path = %self.path.display(), items = items.len(), "catalog loaded");
        Ok(items)
    }
}

/// Catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<ClothingItem>,
}

impl InMemoryCatalog {
    /// Catalog serving a fixed snapshot
    pub const fn new(items: Vec<ClothingItem>) -> Self {
        Self { items }
    }
}

impl ItemCatalog for InMemoryCatalog {
    fn fetch_items(&self, _credentials: &CredentialContext) -> Result<Vec<ClothingItem>> {
        Ok(self.items.clone())
    }
}
