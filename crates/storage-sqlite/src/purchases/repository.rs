use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use metalfolio_core::purchases::{Purchase, PurchaseDraft, PurchaseRepositoryTrait};
use metalfolio_core::Result;

use super::model::{NewPurchaseDB, PurchaseDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::purchases;
use crate::schema::purchases::dsl::*;

/// Diesel-backed purchase store. Reads go through the pool; writes are
/// serialized by the writer actor.
pub struct PurchaseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PurchaseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PurchaseRepository { pool, writer }
    }
}

#[async_trait]
impl PurchaseRepositoryTrait for PurchaseRepository {
    fn list_all(&self) -> Result<Vec<Purchase>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = purchases
            .order((purchase_date.desc(), id.desc()))
            .load::<PurchaseDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Purchase::try_from).collect()
    }

    async fn insert(&self, draft: PurchaseDraft) -> Result<Purchase> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Purchase> {
                let new_row = NewPurchaseDB::from(draft);
                let row = diesel::insert_into(purchases::table)
                    .values(&new_row)
                    .returning(PurchaseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Purchase::try_from(row)
            })
            .await
    }

    async fn delete_by_id(&self, purchase_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(purchases.find(purchase_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
