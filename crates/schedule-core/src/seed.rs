//! Bundled Seed Data
//!
//! The static dataset the board starts from.

use tracing::info;

use crate::domain::{DomainResult, ScheduleItem};
use crate::repository::ScheduleRepository;

/// Seed dataset compiled into the binary
pub const SEED_JSON: &str = include_str!("../data/schedules.json");

/// Parse a seed dataset (a JSON array of schedule records)
pub fn parse_seed(raw: &str) -> DomainResult<Vec<ScheduleItem>> {
    let items: Vec<ScheduleItem> = serde_json::from_str(raw)?;
    Ok(items)
}

/// Load the bundled seed into a fresh store
pub fn load_seed() -> DomainResult<ScheduleRepository> {
    let items = parse_seed(SEED_JSON)?;
    info!(count = items.len(), "loaded bundled seed");
    ScheduleRepository::from_items(items)
}
