//! Outfit publishing boundary and a directory-backed publisher

use crate::io::catalog::CredentialContext;
use crate::io::configuration::SHARE_FILE_PREFIX;
use crate::io::error::{EngineError, Result, WithPath, validation_error};
use crate::wardrobe::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// Identifier assigned to a published outfit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareId(pub String);

impl fmt::Display for ShareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored form of a published outfit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRecord {
    /// Assigned identifier
    pub share_id: ShareId,
    /// Items in the outfit, in role order
    pub item_ids: Vec<ItemId>,
}

/// Destination for shared outfits
pub trait SharePublisher {
    /// Publish an outfit by its item ids
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] for malformed requests and
    /// [`EngineError::Connectivity`] when the target cannot be reached.
    fn publish(&mut self, credentials: &CredentialContext, item_ids: &[ItemId]) -> Result<ShareId>;
}

/// Check a publish request before it leaves the process
///
/// # Errors
///
/// Returns [`EngineError::Validation`] if the caller has no token, the
/// id list is empty, or an id repeats.
pub fn validate_share_request(credentials: &CredentialContext, item_ids: &[ItemId]) -> Result<()> {
    if credentials.token().is_none() {
        return Err(validation_error(&"sharing requires a credential token"));
    }
    if item_ids.is_empty() {
        return Err(validation_error(&"an outfit needs at least one item"));
    }

    let mut seen = HashSet::with_capacity(item_ids.len());
    if let Some(repeated) = item_ids.iter().find(|&&id| !seen.insert(id)) {
        return Err(validation_error(&format!("item {repeated} appears twice")));
    }

    Ok(())
}

/// Link under which a share can be viewed
pub fn share_url(api_base: &str, share_id: &ShareId) -> String {
    format!("{}/api/shared/{share_id}", api_base.trim_end_matches('/'))
}

/// Publisher writing one JSON record per share into a directory
#[derive(Debug, Clone)]
pub struct DirectorySharePublisher {
    directory: PathBuf,
}

impl DirectorySharePublisher {
    /// Publisher targeting an existing directory
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Target directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the record for a share
    pub fn record_path(&self, share_id: &ShareId) -> PathBuf {
        self.directory
            .join(format!("{SHARE_FILE_PREFIX}{share_id}.json"))
    }

    /// Load a previously published record
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read or parsed
    pub fn load(&self, share_id: &ShareId) -> Result<ShareRecord> {
        let path = self.record_path(share_id);
        let json = std::fs::read_to_string(&path).with_path(&path, "read share record")?;
        serde_json::from_str(&json).map_err(|source| EngineError::CatalogFormat {
            path,
            source,
        })
    }

    fn next_sequence(&self) -> Result<u64> {
        let entries = std::fs::read_dir(&self.directory).with_endpoint(&self.directory)?;

        let mut highest = 0;
        for entry in entries {
            let name = entry
                .with_path(&self.directory, "list share records")?
                .file_name();
            let sequence = name
                .to_str()
                .and_then(|name| name.strip_prefix(SHARE_FILE_PREFIX))
                .and_then(|rest| rest.strip_suffix(".json"))
                .and_then(|number| number.parse::<u64>().ok());
            if let Some(sequence) = sequence {
                highest = highest.max(sequence);
            }
        }

        Ok(highest + 1)
    }
}

impl SharePublisher for DirectorySharePublisher {
    fn publish(&mut self, credentials: &CredentialContext, item_ids: &[ItemId]) -> Result<ShareId> {
        validate_share_request(credentials, item_ids)?;

        let share_id = ShareId(self.next_sequence()?.to_string());
        let record = ShareRecord {
            share_id: share_id.clone(),
            item_ids: item_ids.to_vec(),
        };

        let path = self.record_path(&share_id);
        let json = serde_json::to_string_pretty(&record).map_err(|source| {
            EngineError::Serialization {
                target: path.clone(),
                source,
            }
        })?;
        std::fs::write(&path, json).with_path(&path, "write share record")?;

        info!(share = %share_id, items = item_ids.len(), "outfit shared");
        Ok(share_id)
    }
}
