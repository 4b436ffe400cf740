use std::{io::ErrorKind, path::Path};

use serde::Serialize;
use serde_json::{Map, Value};
use tokio::fs;

use crate::{
    error::{Result, VidtagsError},
    record::describe,
};

/// Load and parse a JSON document
pub async fn read_document(path: &Path) -> Result<Value> {
    let json_content = fs::read_to_string(path).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            VidtagsError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VidtagsError::InputUnreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&json_content).map_err(|source| VidtagsError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

pub fn expect_array(path: &Path, value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(VidtagsError::UnexpectedShape {
            path: path.to_path_buf(),
            expected: "a JSON list []",
            found: describe(&other),
        }),
    }
}

pub fn expect_object(path: &Path, value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(VidtagsError::UnexpectedShape {
            path: path.to_path_buf(),
            expected: "a JSON object {}",
            found: describe(&other),
        }),
    }
}

/// Load a document that must be a top-level list
pub async fn read_list(path: &Path) -> Result<Vec<Value>> {
    let document = read_document(path).await?;
    expect_array(path, document)
}

/// Make sure the directory holding `path` exists.
///
/// Returns `true` when a directory had to be created.
pub async fn ensure_parent_dir(path: &Path) -> Result<bool> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(false);
    };

    if fs::try_exists(parent).await.unwrap_or(false) {
        return Ok(false);
    }

    fs::create_dir_all(parent)
        .await
        .map_err(|source| VidtagsError::WriteFailed {
            path: parent.to_path_buf(),
            source,
        })?;
    Ok(true)
}

/// Save a value as pretty-printed (2-space) UTF-8 JSON
pub async fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(value)?;
    fs::write(path, &pretty_json)
        .await
        .map_err(|source| VidtagsError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
}
