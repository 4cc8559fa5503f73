use std::sync::PoisonError;

use crate::error::{Result, StorageError};
use crate::models::StoredReceipt;
use crate::store::ReceiptTable;

/// Map access for stored receipts.
///
/// Locks are held only for the duration of a single map operation. A poisoned
/// lock is recovered: every write is one `HashMap::insert`, so the table is
/// never observed half-written.
pub struct ReceiptRepository<'a> {
    table: &'a ReceiptTable,
}

impl<'a> ReceiptRepository<'a> {
    pub fn new(table: &'a ReceiptTable) -> Self {
        Self { table }
    }

    pub fn insert(&self, receipt: StoredReceipt) {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        table.insert(receipt.id.clone(), receipt);
    }

    pub fn find_by_id(&self, id: &str) -> Result<StoredReceipt> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        table.get(id).cloned().ok_or(StorageError::NotFound)
    }

    pub fn find_points(&self, id: &str) -> Result<u64> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        table
            .get(id)
            .map(|stored| stored.points)
            .ok_or(StorageError::NotFound)
    }
}
