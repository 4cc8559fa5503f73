use super::Receipt;

/// A receipt after it has been scored and assigned an identifier.
///
/// Points are computed once at submission and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    pub id: String,
    pub receipt: Receipt,
    pub points: u64,
}
