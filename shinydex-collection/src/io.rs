//! JSON loading and saving for collection files.

use std::path::Path;

use thiserror::Error;

use crate::types::{Collection, MigratedCollection};

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Failed to serialize collection for {path}: {source}")]
    Serialize {
        path: String,
        source: serde_json::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Parse a collection from a JSON string.
pub fn parse_collection(json: &str) -> Result<Collection, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load a collection file.
///
/// The file should contain one JSON object mapping form ids to either a
/// boolean or a `{ caught, entries }` record.
pub fn load_collection(path: &Path) -> Result<Collection, CollectionError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CollectionError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_collection(&contents).map_err(|e| CollectionError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write a migrated collection as pretty-printed JSON.
///
/// Writes to a sibling temp file first and renames it over the target.
pub fn save_collection(path: &Path, collection: &MigratedCollection) -> Result<(), CollectionError> {
    let write_err = |e: std::io::Error| CollectionError::Write {
        path: path.display().to_string(),
        source: e,
    };

    let serialized = serde_json::to_string_pretty(collection).map_err(|e| CollectionError::Serialize {
        path: path.display().to_string(),
        source: e,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, serialized).map_err(write_err)?;
    std::fs::rename(&tmp, path).map_err(write_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_operation() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CollectionError::Serialize {
            path: "out.json".into(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to serialize collection for out.json"), "{msg}");
        assert!(!msg.contains("parse error"), "{msg}");
    }
}
