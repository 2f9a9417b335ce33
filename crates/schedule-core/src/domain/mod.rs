//! Domain Layer
//!
//! Core entities and business rules.

mod draft;
mod entity;
mod schedule;

pub use draft::{FormField, ScheduleDraft, SchedulePatch};
pub use entity::{DomainError, DomainResult, Entity};
pub use schedule::{
    AllDays, Frequency, MonthlyRule, Recurrence, Repeat, ScheduleItem, ScheduleRecord, Weekday,
};
