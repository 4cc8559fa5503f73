use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::id::{IdGenerator, UuidGenerator};
use crate::models::StoredReceipt;

/// In-memory table of scored receipts, keyed by identifier
pub type ReceiptTable = RwLock<HashMap<String, StoredReceipt>>;

/// Process-lifetime receipt storage shared between request handlers.
///
/// Cloning is cheap and every clone sees the same table. Nothing survives a
/// restart.
#[derive(Clone)]
pub struct ReceiptStore {
    table: Arc<ReceiptTable>,
    id_generator: Arc<dyn IdGenerator>,
}

impl ReceiptStore {
    /// Creates an empty store that hands out UUIDv4 identifiers
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    pub fn with_id_generator(id_generator: impl IdGenerator + 'static) -> Self {
        Self {
            table: Arc::new(RwLock::new(HashMap::new())),
            id_generator: Arc::new(id_generator),
        }
    }

    pub fn table(&self) -> &ReceiptTable {
        &self.table
    }

    pub fn next_id(&self) -> String {
        self.id_generator.next_id()
    }

    /// Number of stored receipts
    pub fn len(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReceiptStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiptStore")
            .field("receipts", &self.len())
            .finish_non_exhaustive()
    }
}
