//! Food record reader — opens the backing JSON file fresh on every call.
//!
//! The path is injected at construction time so tests can point the store
//! at a temp file. Nothing is cached between reads: whatever is on disk at
//! request time is what the response reflects.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// A parsed food record: the extracted `food_name` plus the full document.
///
/// Fields other than `food_name` are opaque to this server and pass
/// through unchanged.
#[derive(Debug, Clone)]
pub struct FoodRecord {
    pub food_name: String,
    pub document: Value,
}

/// Reads the food record from a fixed file path.
#[derive(Debug, Clone)]
pub struct FoodStore {
    path: PathBuf,
}

impl FoodStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the backing file, extracting the `food_name` field.
    pub async fn read(&self) -> ApiResult<FoodRecord> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ApiError::DataFile(format!("{}: {e}", self.path.display())))?;

        let document: Value = serde_json::from_str(&raw)
            .map_err(|e| ApiError::Parse(format!("{}: {e}", self.path.display())))?;

        let food_name = document
            .get("food_name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ApiError::Parse(format!(
                    "{}: missing `food_name` string field",
                    self.path.display()
                ))
            })?
            .to_string();

        Ok(FoodRecord {
            food_name,
            document,
        })
    }
}
