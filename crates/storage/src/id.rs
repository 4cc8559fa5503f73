use uuid::Uuid;

/// Source of identifiers for newly stored receipts.
///
/// Implementations must hand out a different value on every call. Uniqueness is
/// not checked by the store.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUIDv4 identifiers, hyphenated
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
