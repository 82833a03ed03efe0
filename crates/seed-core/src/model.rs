//! Data model for seeding configuration and generated entities.
//!
//! Configuration types describe *how* entities are sampled; entity types are
//! what the generator produces and what the ingestion API accepts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Event type index the backend treats as a purchase.
///
/// Purchases carry a quantity in `value`; every other type carries `1`.
pub const PURCHASE_EVENT_TYPE: i16 = 3;

// ============================================================================
// Configuration Types
// ============================================================================

/// A candidate value with a relative sampling weight.
///
/// Weights are not required to sum to one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightedValue {
    pub value: String,
    pub probability: f64,
}

impl WeightedValue {
    pub fn new(value: impl Into<String>, probability: f64) -> Self {
        Self {
            value: value.into(),
            probability,
        }
    }
}

/// Configuration for one optional user trait or item property.
///
/// `probability` is the chance (0-1) that the key is present at all; when it
/// is, its value is drawn from `values` by weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeConfig {
    /// Attribute key written into the traits/props map
    pub key: String,

    /// Inclusion probability
    pub probability: f64,

    /// Candidate values
    pub values: Vec<WeightedValue>,
}

impl AttributeConfig {
    pub fn new(key: impl Into<String>, probability: f64, values: Vec<WeightedValue>) -> Self {
        Self {
            key: key.into(),
            probability,
            values,
        }
    }
}

/// A price band, picked by weight before drawing a price inside it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    /// Lowest price (inclusive)
    pub min: i64,

    /// Highest price (inclusive)
    pub max: i64,

    /// Relative weight of this band
    pub probability: f64,
}

impl PriceRange {
    pub fn new(min: i64, max: i64, probability: f64) -> Self {
        Self {
            min,
            max,
            probability,
        }
    }
}

/// An event type registered with the backend before events are submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventTypeConfig {
    /// Stable identifier (e.g. "purchase")
    pub id: String,

    /// Display title
    pub title: String,

    /// Numeric code stored on every event of this type
    pub index: i16,

    /// Relative weight when sampling event types
    pub weight: f64,

    /// Popularity decay half-life; interpreted by the backend only
    pub half_life_days: f64,
}

impl EventTypeConfig {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        index: i16,
        weight: f64,
        half_life_days: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            index,
            weight,
            half_life_days,
        }
    }
}

// ============================================================================
// Generated Entities
// ============================================================================

/// A generated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub user_id: String,
    pub traits: BTreeMap<String, String>,
}

/// A generated catalog item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub item_id: String,
    pub price: i64,
    pub available: bool,
    pub tags: Vec<String>,
    /// Always contains `brand`
    pub props: BTreeMap<String, String>,
}

impl Item {
    /// The item's brand property.
    pub fn brand(&self) -> Option<&str> {
        self.props.get("brand").map(String::as_str)
    }
}

/// A generated behavioral event linking a user to an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub user_id: String,
    pub item_id: String,
    /// An [`EventTypeConfig::index`]
    #[serde(rename = "type")]
    pub event_type: i16,
    /// RFC 3339 timestamp with millisecond precision
    pub ts: String,
    pub value: u32,
}

/// Build a deterministic entity ID such as `user-0001`.
///
/// Ordinals below 10000 are zero-padded to four digits; larger ordinals keep
/// all their digits, so IDs never collide within one prefix.
pub fn entity_id(prefix: &str, ordinal: u64) -> String {
    format!("{prefix}-{ordinal:04}")
}
