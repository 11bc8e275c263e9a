//! Snapshot persistence for the cart & wishlist store.
//!
//! The whole store state is serialized after each mutation and rehydrated
//! wholesale at startup. The backing medium is swappable behind
//! [`SnapshotStore`]: a JSON file in production, an in-memory slot in tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use printshop_core::{CartItem, Product, User};

/// Fixed namespace key the snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "printshop-storage";

/// Errors raised by snapshot backends.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Reading or writing the backing medium failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable bundle of the entire store state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    #[serde(default)]
    pub cart: Vec<CartItem>,
    #[serde(default)]
    pub wishlist: Vec<Product>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub authenticated: bool,
}

/// Durable key-value persistence for store snapshots.
pub trait SnapshotStore: Send {
    /// Load the persisted snapshot, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error when the medium is readable but uninterpretable.
    fn load(&self) -> Result<Option<StoreSnapshot>, SnapshotError>;

    /// Persist the snapshot wholesale, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when the medium cannot be written.
    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), SnapshotError>;
}

// =============================================================================
// JSON file backend
// =============================================================================

/// Snapshot store backed by a single JSON file on disk.
///
/// The file holds one object with the snapshot under [`SNAPSHOT_KEY`],
/// mirroring the namespaced layout of a browser key-value store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store writing to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<StoreSnapshot>, SnapshotError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value: serde_json::Value = serde_json::from_str(&contents)?;
        match value.get(SNAPSHOT_KEY) {
            Some(snapshot) => Ok(Some(serde_json::from_value(snapshot.clone())?)),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), SnapshotError> {
        let document = serde_json::json!({ SNAPSHOT_KEY: snapshot });
        std::fs::write(&self.path, serde_json::to_string_pretty(&document)?)?;
        Ok(())
    }
}

// =============================================================================
// In-memory backend
// =============================================================================

/// In-memory snapshot store for tests.
///
/// Clones share the same slot, so a test can hold one handle and inspect
/// what the store persisted through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    slot: Arc<Mutex<Option<StoreSnapshot>>>,
}

impl InMemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently saved snapshot, if any.
    #[must_use]
    pub fn current(&self) -> Option<StoreSnapshot> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Option<StoreSnapshot>, SnapshotError> {
        Ok(self.current())
    }

    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), SnapshotError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use printshop_core::ProductId;
    use rust_decimal::Decimal;

    fn sample_snapshot() -> StoreSnapshot {
        let product = Product {
            id: ProductId::new("p-1"),
            title: "Flyers".to_string(),
            images: Vec::new(),
            price: Decimal::new(899, 2),
            set_size: 25,
            stock: 300,
            description: String::new(),
            category: None,
            sub_category: None,
            shape: None,
            size: None,
            compare_at_price: None,
            discount_percentage: None,
        };
        StoreSnapshot {
            cart: vec![CartItem::new(product.clone(), 3, Vec::new())],
            wishlist: vec![product],
            user: None,
            authenticated: false,
        }
    }

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("printshop-snapshot-{tag}-{}.json", std::process::id()))
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = temp_path("round-trip");
        let store = JsonFileStore::new(&path);
        let snapshot = sample_snapshot();

        store.save(&snapshot).expect("save");
        let loaded = store.load().expect("load").expect("snapshot present");
        assert_eq!(loaded, snapshot);

        let raw = std::fs::read_to_string(&path).expect("read file");
        assert!(raw.contains(SNAPSHOT_KEY));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_json_file_missing_is_none() {
        let store = JsonFileStore::new(temp_path("missing-nonexistent"));
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn test_in_memory_round_trip() {
        let store = InMemoryStore::new();
        assert!(store.load().expect("load").is_none());

        let snapshot = sample_snapshot();
        store.save(&snapshot).expect("save");

        let clone = store.clone();
        assert_eq!(clone.load().expect("load"), Some(snapshot));
    }
}
