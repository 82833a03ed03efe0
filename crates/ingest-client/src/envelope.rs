//! Request envelopes for the ingestion endpoints.
//!
//! Every call carries the target namespace next to its entities. Entity
//! envelopes borrow their payload so chunks are sent without copying.

use seed_core::{Event, EventTypeConfig, Item, User};
use serde::Serialize;

/// One event type in the backend's upsert shape.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventTypeUpsert {
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: i16,
    pub weight: f64,
    pub half_life_days: f64,
    pub is_active: bool,
}

impl From<&EventTypeConfig> for EventTypeUpsert {
    fn from(config: &EventTypeConfig) -> Self {
        Self {
            name: config.title.clone(),
            event_type: config.index,
            weight: config.weight,
            half_life_days: config.half_life_days,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EventTypesUpsertRequest<'a> {
    pub namespace: &'a str,
    pub types: Vec<EventTypeUpsert>,
}

impl<'a> EventTypesUpsertRequest<'a> {
    pub fn from_configs(namespace: &'a str, configs: &[EventTypeConfig]) -> Self {
        Self {
            namespace,
            types: configs.iter().map(EventTypeUpsert::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UsersUpsertRequest<'a> {
    pub namespace: &'a str,
    pub users: &'a [User],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ItemsUpsertRequest<'a> {
    pub namespace: &'a str,
    pub items: &'a [Item],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EventsBatchRequest<'a> {
    pub namespace: &'a str,
    pub events: &'a [Event],
}
