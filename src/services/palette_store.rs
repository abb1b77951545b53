//! Saved-palette list.
//!
//! All palettes live as one JSON array under a single key of the injected
//! [`KeyValueStore`]. Mutations are read-modify-write cycles serialized by a
//! mutex, so two concurrent saves never drop each other.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::storage::KeyValueStore;
use crate::error::ToolError;
use crate::models::{SavedPalette, StoredColor};

/// Key used when none is configured.
pub const DEFAULT_KEY: &str = "colorPalettes";

pub struct PaletteStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    lock: Mutex<()>,
}

impl PaletteStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, DEFAULT_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            lock: Mutex::new(()),
        }
    }

    /// All saved palettes, oldest first.
    ///
    /// A stored value that does not parse is logged, reset to an empty list
    /// and read as empty.
    pub async fn list(&self) -> Result<Vec<SavedPalette>, ToolError> {
        if let Some(palettes) = self.load().await? {
            return Ok(palettes);
        }

        // Reset under the write lock so it cannot clobber a concurrent save
        let _guard = self.lock.lock().await;
        self.list_locked().await
    }

    /// [`Self::list`] for callers already holding `lock`.
    async fn list_locked(&self) -> Result<Vec<SavedPalette>, ToolError> {
        match self.load().await? {
            Some(palettes) => Ok(palettes),
            None => {
                self.store.set(&self.key, "[]".to_string()).await?;
                Ok(Vec::new())
            }
        }
    }

    /// Stored palettes, or `None` when the value is corrupt.
    async fn load(&self) -> Result<Option<Vec<SavedPalette>>, ToolError> {
        let Some(raw) = self.store.get(&self.key).await? else {
            return Ok(Some(Vec::new()));
        };

        match serde_json::from_str::<Vec<SavedPalette>>(&raw) {
            Ok(palettes) => Ok(Some(palettes)),
            Err(e) => {
                tracing::warn!(%e, key = %self.key, "Saved palettes are corrupt, resetting");
                Ok(None)
            }
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<SavedPalette>, ToolError> {
        Ok(self.list().await?.into_iter().find(|p| p.id == id))
    }

    /// Save a palette under `name`, stamped with the current time.
    pub async fn save(&self, name: &str, colors: Vec<StoredColor>) -> Result<SavedPalette, ToolError> {
        self.save_at(name, colors, Utc::now()).await
    }

    /// Save a palette created at `now`.
    ///
    /// The id is `now` in Unix milliseconds, bumped until it is unused.
    pub async fn save_at(
        &self,
        name: &str,
        colors: Vec<StoredColor>,
        now: DateTime<Utc>,
    ) -> Result<SavedPalette, ToolError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ToolError::InvalidName);
        }
        if colors.is_empty() {
            return Err(ToolError::InvalidInput("palette has no colors".to_string()));
        }

        let _guard = self.lock.lock().await;
        let mut palettes = self.list_locked().await?;

        let mut millis = now.timestamp_millis();
        while palettes.iter().any(|p| p.id == millis.to_string()) {
            millis += 1;
        }

        let palette = SavedPalette {
            id: millis.to_string(),
            name: name.to_string(),
            colors,
            created_at: now,
        };
        palettes.push(palette.clone());
        self.write(&palettes).await?;

        tracing::info!(id = %palette.id, name = %palette.name, colors = palette.colors.len(), "Saved palette");
        Ok(palette)
    }

    /// Delete the palette with `id`. Returns false if there was none.
    pub async fn delete(&self, id: &str) -> Result<bool, ToolError> {
        let _guard = self.lock.lock().await;
        let mut palettes = self.list_locked().await?;

        let before = palettes.len();
        palettes.retain(|p| p.id != id);
        if palettes.len() == before {
            return Ok(false);
        }

        self.write(&palettes).await?;
        tracing::info!(id, "Deleted palette");
        Ok(true)
    }

    async fn write(&self, palettes: &[SavedPalette]) -> Result<(), ToolError> {
        let raw = serde_json::to_string(palettes).map_err(crate::error::StoreError::from)?;
        self.store.set(&self.key, raw).await?;
        Ok(())
    }
}
