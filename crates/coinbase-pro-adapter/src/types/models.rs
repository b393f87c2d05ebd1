/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{ActivityType, HoldType};

/// Account snapshot as returned by GET /accounts/{id}
///
/// Amounts are kept as the server's literal decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: String,
    pub currency: String,
    pub balance: String,
    pub available: String,
    pub holds: String,
}

impl Account {
    pub fn balance_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.balance)
    }

    pub fn available_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.available)
    }

    pub fn holds_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.holds)
    }
}

/// Account entry as returned by GET /accounts (`hold`, not `holds`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListAccount {
    pub id: String,
    pub currency: String,
    pub balance: String,
    pub available: String,
    pub hold: String,
}

impl ListAccount {
    pub fn balance_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.balance)
    }

    pub fn available_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.available)
    }

    pub fn hold_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.hold)
    }
}

/// Ledger entry from GET /accounts/{id}/ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountActivity {
    pub id: String,
    pub created_at: String,
    pub amount: String,
    pub balance: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub details: ActivityDetail,
}

impl AccountActivity {
    pub fn kind(&self) -> ActivityType {
        ActivityType::from_wire(&self.activity_type)
    }

    pub fn amount_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.amount)
    }

    pub fn balance_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.balance)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityDetail {
    pub order_id: String,
    pub trade_id: String,
    pub product_id: String,
}

/// Hold from GET /accounts/{id}/holds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountHold {
    pub id: String,
    pub account_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub hold_type: String,
    /// Id of the order or transfer that created the hold
    #[serde(rename = "ref")]
    pub reference: String,
}

impl AccountHold {
    pub fn kind(&self) -> HoldType {
        HoldType::from_wire(&self.hold_type)
    }

    pub fn amount_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.amount)
    }
}

fn parse_decimal(value: &str) -> Option<Decimal> {
    value.parse().ok()
}
