//! Repository Layer
//!
//! Data access abstractions and the in-memory implementation.

mod schedule_repo;
mod traits;


pub use schedule_repo::ScheduleRepository;
pub use traits::{Repository, SearchableRepository};
