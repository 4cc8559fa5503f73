pub mod receipt;
pub mod stored_receipt;

pub use receipt::{Item, Receipt};
pub use stored_receipt::StoredReceipt;
