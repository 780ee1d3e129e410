//! JSON save file for the backpack and ledger.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SaveLoadError;
use crate::inventory::Inventory;
use crate::ledger::Ledger;

/// On-disk shape of a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub items: Inventory,
    pub health: i32,
    /// Older saves carry only items and health.
    #[serde(default)]
    pub score: u32,
}

pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, inventory: &Inventory, ledger: &Ledger) -> Result<(), SaveLoadError> {
        let record = SaveRecord {
            items: inventory.clone(),
            health: ledger.hit_points,
            score: ledger.score,
        };
        let json = serde_json::to_string_pretty(&record).map_err(SaveLoadError::Encode)?;

        // Write then rename so a crash never leaves a half-written save behind
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::info!("Saved {} items to {}", inventory.len(), self.path.display());
        Ok(())
    }

    /// `Ok(None)` when there is no save yet.
    pub fn load(&self) -> Result<Option<(Inventory, Ledger)>, SaveLoadError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let record: SaveRecord = serde_json::from_str(&raw).map_err(SaveLoadError::Corrupt)?;

        tracing::info!("Loaded {} items from {}", record.items.len(), self.path.display());
        Ok(Some((record.items, Ledger::new(record.health, record.score))))
    }
}
