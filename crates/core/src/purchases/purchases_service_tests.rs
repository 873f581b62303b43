use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::errors::{Error, Result, ValidationError};
use crate::purchases::purchases_model::{MetalType, NewPurchase, Purchase, PurchaseDraft};
use crate::purchases::purchases_service::PurchaseService;
use crate::purchases::purchases_traits::{PurchaseRepositoryTrait, PurchaseServiceTrait};

/// In-memory repository double that mimics autoincrement ids.
#[derive(Default)]
struct MockPurchaseRepository {
    rows: Mutex<Vec<Purchase>>,
    next_id: Mutex<i32>,
}

#[async_trait]
impl PurchaseRepositoryTrait for MockPurchaseRepository {
    fn list_all(&self) -> Result<Vec<Purchase>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            b.purchase_date
                .cmp(&a.purchase_date)
                .then(b.id.cmp(&a.id))
        });
        Ok(rows)
    }

    async fn insert(&self, draft: PurchaseDraft) -> Result<Purchase> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let purchase = Purchase {
            id: *next_id,
            metal_type: draft.metal_type,
            weight_oz: draft.weight_oz,
            price_paid: draft.price_paid,
            purchase_date: draft.purchase_date,
            notes: draft.notes,
        };
        self.rows.lock().unwrap().push(purchase.clone());
        Ok(purchase)
    }

    async fn delete_by_id(&self, purchase_id: i32) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != purchase_id);
        Ok(before - rows.len())
    }
}

fn service_with_repo() -> (PurchaseService, Arc<MockPurchaseRepository>) {
    let repo = Arc::new(MockPurchaseRepository::default());
    (PurchaseService::new(repo.clone()), repo)
}

fn gold_purchase(date: &str) -> NewPurchase {
    NewPurchase {
        metal_type: "gold".to_string(),
        weight_oz: dec!(1.0),
        price_paid: dec!(1800),
        purchase_date: date.to_string(),
        notes: Some("coin".to_string()),
    }
}

#[tokio::test]
async fn test_add_then_list_round_trips_the_record() {
    let (service, _repo) = service_with_repo();

    let created = service.add_purchase(gold_purchase("2024-02-10")).await.unwrap();
    assert_eq!(created.id, 1);

    let listed = service.get_purchases().unwrap();
    assert_eq!(listed.len(), 1);
    let found = &listed[0];
    assert_eq!(found.metal_type, MetalType::Gold);
    assert_eq!(found.weight_oz, dec!(1.0));
    assert_eq!(found.price_paid, dec!(1800));
    assert_eq!(
        found.purchase_date,
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    );
    assert_eq!(found.notes.as_deref(), Some("coin"));
}

#[tokio::test]
async fn test_list_orders_newest_purchase_date_first() {
    let (service, _repo) = service_with_repo();
    service.add_purchase(gold_purchase("2024-01-01")).await.unwrap();
    service.add_purchase(gold_purchase("2024-06-01")).await.unwrap();
    service.add_purchase(gold_purchase("2024-03-01")).await.unwrap();

    let dates: Vec<String> = service
        .get_purchases()
        .unwrap()
        .iter()
        .map(|p| p.purchase_date.to_string())
        .collect();
    assert_eq!(dates, vec!["2024-06-01", "2024-03-01", "2024-01-01"]);
}

#[tokio::test]
async fn test_invalid_input_never_reaches_the_repository() {
    let (service, repo) = service_with_repo();

    let mut bad_metal = gold_purchase("2024-01-01");
    bad_metal.metal_type = "tin".to_string();
    let err = service.add_purchase(bad_metal).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::UnknownMetal(_))
    ));

    let mut bad_weight = gold_purchase("2024-01-01");
    bad_weight.weight_oz = dec!(0);
    assert!(service.add_purchase(bad_weight).await.is_err());

    assert!(repo.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let (service, repo) = service_with_repo();
    let created = service.add_purchase(gold_purchase("2024-01-01")).await.unwrap();

    service.remove_purchase(created.id).await.unwrap();
    assert!(repo.rows.lock().unwrap().is_empty());

    // Second delete of the same id, and a delete of a never-assigned id,
    // both succeed without touching the store.
    service.remove_purchase(created.id).await.unwrap();
    service.remove_purchase(9999).await.unwrap();
    assert!(repo.rows.lock().unwrap().is_empty());
}
