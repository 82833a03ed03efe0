//! JSONL preview through the generate command handler.

use crate::fixture_args;
use recsys_seed::{render_config, run_generate};
use seed_core::{Event, Item, SeedConfig, User};
use seed_populate::PreviewArgs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tempfile::TempDir;

fn read_jsonl<T: serde::de::DeserializeOwned>(path: &Path) -> Vec<T> {
    let reader = BufReader::new(std::fs::File::open(path).unwrap());
    reader
        .lines()
        .map(|line| serde_json::from_str(&line.unwrap()).unwrap())
        .collect()
}

fn preview(output_dir: &Path) -> (Vec<User>, Vec<Item>, Vec<Event>) {
    run_generate(PreviewArgs {
        output_dir: output_dir.to_path_buf(),
        common: fixture_args(),
    })
    .unwrap();

    (
        read_jsonl(&output_dir.join("users.jsonl")),
        read_jsonl(&output_dir.join("items.jsonl")),
        read_jsonl(&output_dir.join("events.jsonl")),
    )
}

#[test]
fn test_preview_matches_config() {
    let temp_dir = TempDir::new().unwrap();
    let (users, items, events) = preview(temp_dir.path());

    assert_eq!(users.len(), 12);
    assert_eq!(users[11].user_id, "user-0012");
    assert!(users.iter().all(|u| u.traits.contains_key("plan")));

    assert_eq!(items.len(), 30);
    for item in &items {
        assert!((5..=500).contains(&item.price));
        assert!(!item.tags.is_empty() && item.tags.len() <= 3);
        assert!(item.brand().is_some());
    }

    for user in &users {
        let count = events.iter().filter(|e| e.user_id == user.user_id).count();
        assert!((2..=5).contains(&count), "{} has {count} events", user.user_id);
    }
    for event in &events {
        assert!(event.ts.ends_with('Z'));
        chrono::DateTime::parse_from_rfc3339(&event.ts).unwrap();
    }
}

#[test]
fn test_seeded_preview_is_reproducible() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();

    let (users1, items1, events1) = preview(first_dir.path());
    let (users2, items2, events2) = preview(second_dir.path());

    assert_eq!(users1, users2);
    assert_eq!(items1, items2);
    // Timestamps depend on the wall clock; everything else must match.
    let strip = |events: &[Event]| -> Vec<(String, String, i16, u32)> {
        events
            .iter()
            .map(|e| (e.user_id.clone(), e.item_id.clone(), e.event_type, e.value))
            .collect()
    };
    assert_eq!(strip(&events1), strip(&events2));
}

#[test]
fn test_show_config_renders_overrides() {
    let mut args = fixture_args();
    args.namespace = Some("staging".to_string());

    let yaml = render_config(&args).unwrap();
    let config = SeedConfig::from_yaml(&yaml).unwrap();
    assert_eq!(config.namespace, "staging");
    assert_eq!(config.item_count, 30);
    assert_eq!(config.brands, vec!["acme", "globex", "initech"]);
}
