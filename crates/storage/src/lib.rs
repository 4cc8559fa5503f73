pub mod dto;
pub mod error;
pub mod id;
pub mod models;
pub mod repository;
pub mod services;
pub mod store;

pub use id::{IdGenerator, UuidGenerator};
pub use store::ReceiptStore;
