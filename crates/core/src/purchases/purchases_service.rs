use log::debug;
use std::sync::Arc;

use super::purchases_model::{NewPurchase, Purchase};
use super::purchases_traits::{PurchaseRepositoryTrait, PurchaseServiceTrait};
use crate::errors::Result;

/// Service for managing purchase records.
///
/// Validation happens here, at write time: every record that reaches the
/// repository carries a recognized metal type and well-formed numbers, so
/// downstream aggregation never sees an unknown metal.
pub struct PurchaseService {
    repository: Arc<dyn PurchaseRepositoryTrait>,
}

impl PurchaseService {
    pub fn new(repository: Arc<dyn PurchaseRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl PurchaseServiceTrait for PurchaseService {
    fn get_purchases(&self) -> Result<Vec<Purchase>> {
        self.repository.list_all()
    }

    async fn add_purchase(&self, new_purchase: NewPurchase) -> Result<Purchase> {
        let draft = new_purchase.validate()?;
        debug!(
            "Recording purchase: {} {} oz for {}",
            draft.metal_type, draft.weight_oz, draft.price_paid
        );
        self.repository.insert(draft).await
    }

    /// Deleting an absent id is a success; the operation is idempotent.
    async fn remove_purchase(&self, purchase_id: i32) -> Result<()> {
        let affected = self.repository.delete_by_id(purchase_id).await?;
        if affected == 0 {
            debug!("Delete of purchase {} matched no rows", purchase_id);
        }
        Ok(())
    }
}
