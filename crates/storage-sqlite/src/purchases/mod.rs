//! Purchases storage - row models and repository.

pub mod model;
pub mod repository;

pub use model::{NewPurchaseDB, PurchaseDB};
pub use repository::PurchaseRepository;
