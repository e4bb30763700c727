//! Template and session stores.
//!
//! [`TemplateStore`] is the read-only catalogue of mapping templates: a single
//! JSON document keyed by template identifier. [`SessionStore`] keeps
//! client-local state (the active definition, the mapping input text and the
//! export options) as one JSON file per key.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use tabmap_model::{ExportOptions, MappingDefinition};

use crate::error::{StoreError, TemplateError};

/// Read-only catalogue of mapping templates.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    origin: String,
    templates: BTreeMap<String, serde_json::Value>,
}

impl TemplateStore {
    /// Reads and parses a template document from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&path.display().to_string(), &contents)
    }

    /// Parses a template document; `origin` names it in error messages.
    pub fn from_json(origin: &str, json: &str) -> Result<Self, TemplateError> {
        let templates: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|source| TemplateError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        debug!(origin, templates = templates.len(), "template store loaded");
        Ok(Self {
            origin: origin.to_string(),
            templates,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Fetches a template with defaults filled and positions renumbered.
    pub fn fetch(&self, id: &str) -> Result<MappingDefinition, TemplateError> {
        let value = self
            .templates
            .get(id)
            .ok_or_else(|| TemplateError::NotFound { id: id.to_string() })?;
        let definition = MappingDefinition::deserialize(value).map_err(|source| {
            TemplateError::InvalidTemplate {
                id: id.to_string(),
                source,
            }
        })?;
        Ok(definition.with_defaults())
    }

    /// Template identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Persisted client-local state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default)]
    pub definition: Option<MappingDefinition>,
    /// Raw mapping text as last typed by the user.
    #[serde(default)]
    pub mapping_text: String,
    #[serde(default)]
    pub export: ExportOptions,
}

/// Directory-backed store for [`SessionSnapshot`]s.
#[derive(Debug, Clone)]
pub struct SessionStore {
    base_dir: PathBuf,
}

impl SessionStore {
    /// Opens a store, creating the directory if needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|source| StoreError::io(&base_dir, source))?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn save(&self, key: &str, snapshot: &SessionSnapshot) -> Result<PathBuf, StoreError> {
        let path = self.snapshot_path(key);
        let json =
            serde_json::to_string_pretty(snapshot).map_err(|source| StoreError::json(&path, source))?;
        fs::write(&path, json).map_err(|source| StoreError::io(&path, source))?;
        debug!(key, path = %path.display(), "session saved");
        Ok(path)
    }

    /// Loads a snapshot; `None` if nothing was saved under `key`.
    pub fn load(&self, key: &str) -> Result<Option<SessionSnapshot>, StoreError> {
        let path = self.snapshot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path).map_err(|source| StoreError::io(&path, source))?;
        let mut snapshot: SessionSnapshot =
            serde_json::from_str(&contents).map_err(|source| StoreError::json(&path, source))?;
        snapshot.definition = snapshot.definition.map(MappingDefinition::with_defaults);
        Ok(Some(snapshot))
    }

    pub fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let path = self.snapshot_path(key);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(|source| StoreError::io(&path, source))?;
        Ok(true)
    }

    pub fn exists(&self, key: &str) -> bool {
        self.snapshot_path(key).exists()
    }

    fn snapshot_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", normalize_key(key)))
    }
}

/// Filesystem-safe form of a session key.
fn normalize_key(key: &str) -> String {
    key.trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}
