//! Schedule Board Core
//!
//! Layered architecture:
//! - domain: schedule entities, the form draft and business rules
//! - repository: data access abstractions and the in-memory store
//! - board: application state and user-action transitions
//! - seed: the bundled starting dataset

pub mod board;
pub mod domain;
pub mod repository;
pub mod seed;

pub use board::{reduce, Board, BoardAction, ModalState};
pub use domain::{
    AllDays, DomainError, DomainResult, Entity, FormField, Frequency, MonthlyRule, Recurrence,
    Repeat, ScheduleDraft, ScheduleItem, SchedulePatch, Weekday,
};
pub use repository::{Repository, ScheduleRepository, SearchableRepository};
