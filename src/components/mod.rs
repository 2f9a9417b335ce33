//! UI Components
//!
//! Reusable Leptos components.

mod modal;
mod schedule_form;
mod table_row;
mod toolbar;

pub use modal::Modal;
pub use schedule_form::ScheduleForm;
pub use table_row::TableRow;
pub use toolbar::Toolbar;
