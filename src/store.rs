//! JSON-file persistence for the city registry
//!
//! The registry round-trips through a versioned document holding the
//! city list in ascending id order; loading re-inserts into a fresh
//! balanced tree. The core stays IO-free - this is the only module that
//! touches the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use urbe_core::city::City;
use urbe_core::error::{Result, UrbeError};
use urbe_core::registry::CityRegistry;

const STORE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    cities: Vec<City>,
}

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open(path: &Path) -> Self {
        Store {
            path: path.to_path_buf(),
        }
    }

    /// Load the registry; a missing file is an empty registry.
    pub fn load(&self) -> Result<CityRegistry> {
        if !self.path.exists() {
            return Ok(CityRegistry::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let doc: StoreDocument =
            serde_json::from_str(&raw).map_err(|e| UrbeError::InvalidStore {
                reason: e.to_string(),
            })?;
        if doc.version != STORE_VERSION {
            return Err(UrbeError::InvalidStore {
                reason: format!("unsupported version {}", doc.version),
            });
        }

        let mut registry = CityRegistry::new();
        for city in doc.cities {
            registry.insert(city).map_err(|e| UrbeError::InvalidStore {
                reason: e.to_string(),
            })?;
        }

        tracing::debug!(path = %self.path.display(), cities = registry.len(), "store_loaded");
        Ok(registry)
    }

    pub fn save(&self, registry: &CityRegistry) -> Result<()> {
        let doc = StoreDocument {
            version: STORE_VERSION,
            cities: registry.cities().into_iter().cloned().collect(),
        };
        let raw = serde_json::to_string_pretty(&doc)?;
        fs::write(&self.path, raw)?;

        tracing::debug!(path = %self.path.display(), cities = doc.cities.len(), "store_saved");
        Ok(())
    }
}
