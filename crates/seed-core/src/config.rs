//! Seeding configuration document.
//!
//! A [`SeedConfig`] describes one seeding run: how many entities to build,
//! which vocabularies to draw from, and the statistical shape of traits,
//! properties, prices and events. Every field has a default so a partial
//! YAML document is valid.

use crate::model::{AttributeConfig, EventTypeConfig, PriceRange, WeightedValue};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A field holds a value the generator cannot work with
    #[error("Invalid config field '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Seed Config
// ============================================================================

/// Full configuration for one seeding run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeedConfig {
    /// Tenant partition all entities are written under
    pub namespace: String,

    /// Number of users to generate
    pub user_count: u64,

    /// Ordinal of the first generated user (`user-0001` for 1)
    pub user_start_index: u64,

    /// Number of items to generate
    pub item_count: u64,

    /// Lower bound of events per user (inclusive)
    pub min_events_per_user: u64,

    /// Upper bound of events per user (inclusive)
    pub max_events_per_user: u64,

    /// Brand vocabulary; every item gets exactly one
    pub brands: Vec<String>,

    /// Tag vocabulary; every item gets one to three
    pub tags: Vec<String>,

    /// Event types registered before events are submitted
    pub event_types: Vec<EventTypeConfig>,

    /// Optional user traits
    pub user_traits: Vec<AttributeConfig>,

    /// Optional item properties (`brand` is always set on top of these)
    pub item_properties: Vec<AttributeConfig>,

    /// Weighted price bands; empty means uniform 5..=200
    pub price_ranges: Vec<PriceRange>,

    /// RNG seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            namespace: "default".to_string(),
            user_count: 50,
            user_start_index: 1,
            item_count: 100,
            min_events_per_user: 10,
            max_events_per_user: 30,
            brands: ["alfa", "bravo", "charlie", "delta", "echo", "foxtrot"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            tags: ["action", "indie", "rpg", "strategy", "sim", "puzzle"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            event_types: default_event_types(),
            user_traits: default_user_traits(),
            item_properties: default_item_properties(),
            price_ranges: vec![
                PriceRange::new(5, 25, 0.4),
                PriceRange::new(25, 75, 0.3),
                PriceRange::new(75, 150, 0.2),
                PriceRange::new(150, 300, 0.1),
            ],
            seed: None,
        }
    }
}

impl SeedConfig {
    /// Load config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize config back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the structural preconditions of the generator.
    ///
    /// Builders still reject bad input on their own; this reports the
    /// problem up front with the offending field name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.trim().is_empty() {
            return Err(ConfigError::invalid("namespace", "must not be empty"));
        }

        if self.user_count > 0
            && self
                .user_start_index
                .checked_add(self.user_count - 1)
                .is_none()
        {
            return Err(ConfigError::invalid(
                "user_start_index",
                format!(
                    "{} users starting at {} overflow the user index range",
                    self.user_count, self.user_start_index
                ),
            ));
        }

        if self.min_events_per_user > self.max_events_per_user {
            return Err(ConfigError::invalid(
                "min_events_per_user",
                format!(
                    "{} exceeds max_events_per_user {}",
                    self.min_events_per_user, self.max_events_per_user
                ),
            ));
        }

        if self.item_count > 0 {
            if self.brands.is_empty() {
                return Err(ConfigError::invalid("brands", "must not be empty"));
            }
            if self.tags.is_empty() {
                return Err(ConfigError::invalid("tags", "must not be empty"));
            }
        }

        let wants_events = self.user_count > 0 && self.max_events_per_user > 0;
        if wants_events {
            if self.event_types.is_empty() {
                return Err(ConfigError::invalid("event_types", "must not be empty"));
            }
            if self.item_count == 0 {
                return Err(ConfigError::invalid(
                    "item_count",
                    "events need at least one item",
                ));
            }
        }

        for (idx, range) in self.price_ranges.iter().enumerate() {
            if range.min > range.max {
                return Err(ConfigError::invalid(
                    format!("price_ranges[{idx}]"),
                    format!("min {} exceeds max {}", range.min, range.max),
                ));
            }
        }

        validate_attributes("user_traits", &self.user_traits)?;
        validate_attributes("item_properties", &self.item_properties)?;

        Ok(())
    }
}

fn validate_attributes(field: &str, configs: &[AttributeConfig]) -> Result<(), ConfigError> {
    for config in configs {
        if config.values.is_empty() && config.probability > 0.0 {
            return Err(ConfigError::invalid(
                format!("{field}.{}", config.key),
                "values must not be empty",
            ));
        }
    }
    Ok(())
}

fn default_event_types() -> Vec<EventTypeConfig> {
    vec![
        EventTypeConfig::new("view", "View", 0, 0.2, 30.0),
        EventTypeConfig::new("click", "Click", 1, 0.7, 30.0),
        EventTypeConfig::new("add", "Add to Cart", 2, 0.8, 45.0),
        EventTypeConfig::new("purchase", "Purchase", 3, 1.0, 60.0),
    ]
}

fn default_user_traits() -> Vec<AttributeConfig> {
    vec![
        AttributeConfig::new(
            "plan",
            1.0,
            vec![
                WeightedValue::new("free", 0.6),
                WeightedValue::new("plus", 0.3),
                WeightedValue::new("pro", 0.1),
            ],
        ),
        AttributeConfig::new(
            "age_group",
            0.8,
            vec![
                WeightedValue::new("18-24", 0.2),
                WeightedValue::new("25-34", 0.3),
                WeightedValue::new("35-44", 0.25),
                WeightedValue::new("45-54", 0.15),
                WeightedValue::new("55+", 0.1),
            ],
        ),
        AttributeConfig::new(
            "interests",
            0.7,
            vec![
                WeightedValue::new("gaming", 0.4),
                WeightedValue::new("music", 0.3),
                WeightedValue::new("movies", 0.2),
                WeightedValue::new("books", 0.1),
            ],
        ),
    ]
}

fn default_item_properties() -> Vec<AttributeConfig> {
    vec![
        AttributeConfig::new(
            "category",
            0.9,
            vec![
                WeightedValue::new("electronics", 0.3),
                WeightedValue::new("clothing", 0.25),
                WeightedValue::new("books", 0.2),
                WeightedValue::new("home", 0.15),
                WeightedValue::new("sports", 0.1),
            ],
        ),
        AttributeConfig::new(
            "condition",
            0.7,
            vec![
                WeightedValue::new("new", 0.6),
                WeightedValue::new("used", 0.3),
                WeightedValue::new("refurbished", 0.1),
            ],
        ),
    ]
}
