//! Message catalog lookup for user-facing strings.
//!
//! A catalog is a flat JSON object mapping message ids (the English text) to
//! translated text. Missing entries fall back to the message id itself.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, UserEditorError};

/// Translation lookup with identity fallback
#[derive(Debug, Clone, Default)]
pub struct Translator {
    catalog: HashMap<String, String>,
}

impl Translator {
    /// Translator that returns every message id unchanged
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: HashMap<String, String>) -> Self {
        Self { catalog }
    }

    /// Load a JSON catalog from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let catalog: HashMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            UserEditorError::translation(format!("invalid catalog {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), entries = catalog.len(), "loaded message catalog");
        Ok(Self { catalog })
    }

    /// Localized text for a message id
    pub fn tr(&self, msgid: &str) -> String {
        match self.catalog.get(msgid) {
            Some(text) if !text.is_empty() => text.clone(),
            _ => msgid.to_string(),
        }
    }

    /// Localized text with the first `{}` replaced by `arg`
    pub fn tr_fmt(&self, msgid: &str, arg: &str) -> String {
        self.tr(msgid).replacen("{}", arg, 1)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
