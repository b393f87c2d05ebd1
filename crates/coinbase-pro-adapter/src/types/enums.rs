/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Ledger entry type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Transfer,
    Match,
    Fee,
    Rebate,
    Conversion,
    #[serde(other)]
    Unknown,
}

impl ActivityType {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "transfer" => ActivityType::Transfer,
            "match" => ActivityType::Match,
            "fee" => ActivityType::Fee,
            "rebate" => ActivityType::Rebate,
            "conversion" => ActivityType::Conversion,
            _ => ActivityType::Unknown,
        }
    }
}

/// What a hold is reserving funds for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoldType {
    Order,
    Transfer,
    #[serde(other)]
    Unknown,
}

impl HoldType {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "order" => HoldType::Order,
            "transfer" => HoldType::Transfer,
            _ => HoldType::Unknown,
        }
    }
}
