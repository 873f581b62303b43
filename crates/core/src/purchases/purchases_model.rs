//! Purchase domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Date format used for purchase dates, both on the wire and in storage.
/// ISO dates keep lexicographic and chronological order in agreement.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// The four metals this application tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetalType {
    Gold,
    Silver,
    Platinum,
    Palladium,
}

impl MetalType {
    /// All supported metals, in display order.
    pub const ALL: [MetalType; 4] = [
        MetalType::Gold,
        MetalType::Silver,
        MetalType::Platinum,
        MetalType::Palladium,
    ];

    /// Lowercase name as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetalType::Gold => "gold",
            MetalType::Silver => "silver",
            MetalType::Platinum => "platinum",
            MetalType::Palladium => "palladium",
        }
    }

    /// Quote-currency code used by the price provider.
    pub fn symbol(&self) -> &'static str {
        match self {
            MetalType::Gold => "XAU",
            MetalType::Silver => "XAG",
            MetalType::Platinum => "XPT",
            MetalType::Palladium => "XPD",
        }
    }
}

impl FromStr for MetalType {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(MetalType::Gold),
            "silver" => Ok(MetalType::Silver),
            "platinum" => Ok(MetalType::Platinum),
            "palladium" => Ok(MetalType::Palladium),
            other => Err(ValidationError::UnknownMetal(other.to_string())),
        }
    }
}

impl fmt::Display for MetalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted purchase record. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: i32,
    pub metal_type: MetalType,
    pub weight_oz: Decimal,
    pub price_paid: Decimal,
    pub purchase_date: NaiveDate,
    pub notes: Option<String>,
}

/// Input model for recording a new purchase.
///
/// Fields arrive as strings where user input needs validating; call
/// [`NewPurchase::validate`] to obtain a typed [`PurchaseDraft`].
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewPurchase {
    pub metal_type: String,
    pub weight_oz: Decimal,
    pub price_paid: Decimal,
    pub purchase_date: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A validated purchase, ready to persist. The id is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseDraft {
    pub metal_type: MetalType,
    pub weight_oz: Decimal,
    pub price_paid: Decimal,
    pub purchase_date: NaiveDate,
    pub notes: Option<String>,
}

impl NewPurchase {
    /// Validate field values and produce a typed draft.
    ///
    /// Enforces the write-time invariants: a recognized metal type, a
    /// strictly positive weight, a non-negative price, and an ISO date.
    pub fn validate(self) -> Result<PurchaseDraft> {
        if self.metal_type.trim().is_empty() {
            return Err(ValidationError::MissingField("metalType".to_string()).into());
        }
        let metal_type = MetalType::from_str(&self.metal_type)?;

        if self.weight_oz <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "weight must be positive, got {}",
                self.weight_oz
            ))
            .into());
        }
        if self.price_paid < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "price paid must not be negative, got {}",
                self.price_paid
            ))
            .into());
        }

        let purchase_date = NaiveDate::parse_from_str(self.purchase_date.trim(), DATE_FORMAT)
            .map_err(ValidationError::DateTimeParse)?;

        Ok(PurchaseDraft {
            metal_type,
            weight_oz: self.weight_oz,
            price_paid: self.price_paid,
            purchase_date,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
        })
    }
}
