use crate::errors::Result;
use crate::purchases::purchases_model::{NewPurchase, Purchase, PurchaseDraft};
use async_trait::async_trait;

/// Trait for purchase repository operations
#[async_trait]
pub trait PurchaseRepositoryTrait: Send + Sync {
    /// All purchases, newest purchase date first (id as stable tie-break).
    fn list_all(&self) -> Result<Vec<Purchase>>;
    /// Persist a validated draft; returns the row with its assigned id.
    async fn insert(&self, draft: PurchaseDraft) -> Result<Purchase>;
    /// Delete by id; returns rows affected (0 when the id was absent).
    async fn delete_by_id(&self, purchase_id: i32) -> Result<usize>;
}

/// Trait for purchase service operations
#[async_trait]
pub trait PurchaseServiceTrait: Send + Sync {
    fn get_purchases(&self) -> Result<Vec<Purchase>>;
    async fn add_purchase(&self, new_purchase: NewPurchase) -> Result<Purchase>;
    async fn remove_purchase(&self, purchase_id: i32) -> Result<()>;
}
