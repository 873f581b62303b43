//! Database models for purchases.

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use metalfolio_core::errors::Error;
use metalfolio_core::purchases::{Purchase, PurchaseDraft};

/// Storage date format; matches `NaiveDate`'s `Display` output so ordering
/// by the TEXT column is chronological.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Database model for purchases
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::purchases)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDB {
    pub id: i32,
    pub metal_type: String,
    pub weight_oz: f64,
    pub price_paid: f64,
    pub purchase_date: String,
    pub notes: Option<String>,
}

/// Database model for inserting a purchase; the id comes from the table.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::purchases)]
#[serde(rename_all = "camelCase")]
pub struct NewPurchaseDB {
    pub metal_type: String,
    pub weight_oz: f64,
    pub price_paid: f64,
    pub purchase_date: String,
    pub notes: Option<String>,
}

// Conversion to the domain model. Fallible: rows are validated on the way
// in, so a parse failure here means the file was edited out-of-band.
impl TryFrom<PurchaseDB> for Purchase {
    type Error = Error;

    fn try_from(db: PurchaseDB) -> std::result::Result<Self, Error> {
        Ok(Purchase {
            id: db.id,
            metal_type: db.metal_type.parse()?,
            weight_oz: Decimal::try_from(db.weight_oz)?,
            price_paid: Decimal::try_from(db.price_paid)?,
            purchase_date: NaiveDate::parse_from_str(&db.purchase_date, DATE_FORMAT)?,
            notes: db.notes,
        })
    }
}

impl From<PurchaseDraft> for NewPurchaseDB {
    fn from(draft: PurchaseDraft) -> Self {
        Self {
            metal_type: draft.metal_type.to_string(),
            weight_oz: draft.weight_oz.to_f64().unwrap_or_default(),
            price_paid: draft.price_paid.to_f64().unwrap_or_default(),
            purchase_date: draft.purchase_date.format(DATE_FORMAT).to_string(),
            notes: draft.notes,
        }
    }
}
