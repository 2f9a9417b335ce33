//! Schedule Repository
//!
//! In-memory, insertion-ordered store of schedule items.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::traits::{Repository, SearchableRepository};
use crate::domain::{DomainError, DomainResult, ScheduleDraft, ScheduleItem, SchedulePatch};

/// The item store behind the schedule board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRepository {
    items: Vec<ScheduleItem>,
    next_id: u32,
}

impl ScheduleRepository {
    pub fn new() -> Self {
        Self { items: Vec::new(), next_id: 1 }
    }

    /// Build a store from seed items, keeping their order.
    ///
    /// IDs must be unique; new items are numbered after the largest seeded ID.
    pub fn from_items(items: Vec<ScheduleItem>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(DomainError::Conflict(format!("duplicate schedule id {}", item.id)));
            }
        }
        let next_id = items.iter().map(|i| i.id).max().map_or(1, |max| max.saturating_add(1));
        info!(count = items.len(), next_id, "schedule store seeded");
        Ok(Self { items, next_id })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn allocate_id(&mut self) -> u32 {
        // Seeds may sit anywhere in the id space; skip any id still in use.
        while self.position(self.next_id).is_some() {
            self.next_id = self.next_id.wrapping_add(1).max(1);
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }
}

impl Default for ScheduleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository<ScheduleItem> for ScheduleRepository {
    type Draft = ScheduleDraft;
    type Patch = SchedulePatch;

    fn create(&mut self, draft: &ScheduleDraft) -> DomainResult<ScheduleItem> {
        let recurrence = draft
            .validate()
            .inspect_err(|e| warn!(error = %e, "rejected schedule item"))?;
        let item = ScheduleItem {
            id: self.allocate_id(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            subject: draft.subject.clone(),
            recurrence,
            schedule: draft.schedule.clone(),
        };
        debug!(id = item.id, title = %item.title, "schedule item created");
        self.items.push(item.clone());
        Ok(item)
    }

    fn find_by_id(&self, id: u32) -> Option<&ScheduleItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn list(&self) -> &[ScheduleItem] {
        &self.items
    }

    fn update(&mut self, id: u32, patch: SchedulePatch) -> DomainResult<ScheduleItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("schedule item {}", id)))?;
        patch.apply_to(item);
        debug!(id, "schedule item updated");
        Ok(item.clone())
    }

    fn delete(&mut self, id: u32) -> Option<ScheduleItem> {
        let removed = self.position(id).map(|idx| self.items.remove(idx));
        match &removed {
            Some(_) => debug!(id, "schedule item deleted"),
            None => debug!(id, "delete ignored, no such schedule item"),
        }
        removed
    }
}

impl SearchableRepository<ScheduleItem> for ScheduleRepository {
    fn search(&self, query: &str) -> Vec<&ScheduleItem> {
        let needle = query.to_lowercase();
        self.items.iter().filter(|item| item.matches(&needle)).collect()
    }
}
