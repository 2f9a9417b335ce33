//! Schedule Draft
//!
//! Unvalidated form values for creating or editing a schedule item.

use std::fmt;

use super::entity::{DomainError, DomainResult};
use super::schedule::{Frequency, Recurrence, Repeat, ScheduleItem};

/// Fields of the schedule form that can be left blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    Subject,
    Frequency,
    Schedule,
}

impl FormField {
    /// Free-text fields, in form order
    pub const TEXT: [FormField; 4] = [
        FormField::Title,
        FormField::Description,
        FormField::Subject,
        FormField::Schedule,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Subject => "Subject",
            FormField::Frequency => "Frequency",
            FormField::Schedule => "Schedule",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Transient state of the add/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub title: String,
    pub description: String,
    pub subject: String,
    pub schedule: String,
    frequency: Option<Frequency>,
    repeat: Option<Repeat>,
}

impl ScheduleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate from an existing item (edit flow)
    pub fn from_item(item: &ScheduleItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            subject: item.subject.clone(),
            schedule: item.schedule.clone(),
            frequency: Some(item.frequency()),
            repeat: item.repeat(),
        }
    }

    pub fn frequency(&self) -> Option<Frequency> {
        self.frequency
    }

    pub fn repeat(&self) -> Option<Repeat> {
        self.repeat
    }

    /// Text value of a free-text field. `Frequency` has no text and yields "".
    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Subject => &self.subject,
            FormField::Schedule => &self.schedule,
            FormField::Frequency => "",
        }
    }

    /// Set a free-text field. Setting `Frequency` this way is ignored.
    pub fn set_text(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::Subject => self.subject = value,
            FormField::Schedule => self.schedule = value,
            FormField::Frequency => {}
        }
    }

    /// Change the frequency and re-derive the repeat rule.
    ///
    /// A repeat outside the new domain is cleared. Daily has a single rule,
    /// so it is selected directly.
    pub fn set_frequency(&mut self, frequency: Option<Frequency>) {
        self.frequency = frequency;
        self.repeat = match (frequency, self.repeat) {
            (Some(Frequency::Daily), _) => Frequency::Daily.repeat_options().first().copied(),
            (Some(f), Some(r)) if r.frequency() == f => Some(r),
            _ => None,
        };
    }

    /// Select a repeat rule. Rules outside the current frequency's domain are rejected.
    pub fn set_repeat(&mut self, repeat: Option<Repeat>) -> DomainResult<()> {
        match (repeat, self.frequency) {
            (None, _) => {
                self.repeat = None;
                Ok(())
            }
            (Some(r), Some(f)) if r.frequency() == f => {
                self.repeat = Some(r);
                Ok(())
            }
            (Some(r), f) => Err(DomainError::InvalidInput(format!(
                "repeat '{}' does not match frequency {}",
                r,
                f.map(|f| f.label()).unwrap_or("(none)")
            ))),
        }
    }

    /// Required fields that are still blank, in form order
    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing: Vec<FormField> = FormField::TEXT
            .iter()
            .copied()
            .filter(|f| self.text(*f).is_empty())
            .collect();
        if self.frequency.is_none() {
            missing.push(FormField::Frequency);
        }
        missing
    }

    /// The draft's recurrence, if a frequency has been chosen
    pub fn recurrence(&self) -> Option<Recurrence> {
        self.frequency.and_then(|f| Recurrence::new(f, self.repeat).ok())
    }

    /// Validate for creation: every required field must be non-empty.
    pub fn validate(&self) -> DomainResult<Recurrence> {
        let missing = self.missing_fields();
        match self.recurrence() {
            Some(recurrence) if missing.is_empty() => Ok(recurrence),
            _ => Err(DomainError::EmptyFields { missing }),
        }
    }

    /// Patch that overwrites every editable field with this draft's values
    pub fn to_patch(&self) -> SchedulePatch {
        SchedulePatch {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            subject: Some(self.subject.clone()),
            recurrence: self.recurrence(),
            schedule: Some(self.schedule.clone()),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Partial update of a schedule item; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub recurrence: Option<Recurrence>,
    pub schedule: Option<String>,
}

impl SchedulePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Default::default() }
    }

    pub fn apply_to(self, item: &mut ScheduleItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(subject) = self.subject {
            item.subject = subject;
        }
        if let Some(recurrence) = self.recurrence {
            item.recurrence = recurrence;
        }
        if let Some(schedule) = self.schedule {
            item.schedule = schedule;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schedule::{AllDays, MonthlyRule, Weekday};

    fn filled() -> ScheduleDraft {
        let mut draft = ScheduleDraft::new();
        draft.title = "Standup".to_string();
        draft.description = "Daily sync".to_string();
        draft.subject = "Team".to_string();
        draft.schedule = "9am".to_string();
        draft.set_frequency(Some(Frequency::Daily));
        draft
    }

    #[test]
    fn test_daily_selects_all_days() {
        let draft = filled();
        assert_eq!(draft.repeat(), Some(Repeat::Daily(AllDays)));
    }

    #[test]
    fn test_frequency_change_clears_incompatible_repeat() {
        let mut draft = filled();
        draft.set_frequency(Some(Frequency::Weekly));
        assert_eq!(draft.repeat(), None);

        draft.set_repeat(Some(Repeat::Weekly(Weekday::Tuesday))).unwrap();
        draft.set_frequency(Some(Frequency::Weekly));
        assert_eq!(draft.repeat(), Some(Repeat::Weekly(Weekday::Tuesday)));

        draft.set_frequency(Some(Frequency::Monthly));
        assert_eq!(draft.repeat(), None);

        draft.set_frequency(None);
        assert_eq!(draft.repeat(), None);
    }

    #[test]
    fn test_set_repeat_outside_domain_is_rejected() {
        let mut draft = filled();
        let err = draft.set_repeat(Some(Repeat::Monthly(MonthlyRule::FirstMonday)));
        assert!(err.is_err());
        assert_eq!(draft.repeat(), Some(Repeat::Daily(AllDays)));
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        let mut draft = ScheduleDraft::new();
        draft.description = "x".to_string();
        assert_eq!(
            draft.missing_fields(),
            vec![FormField::Title, FormField::Subject, FormField::Schedule, FormField::Frequency]
        );
        assert!(filled().missing_fields().is_empty());
    }

    #[test]
    fn test_validate_ignores_repeat() {
        let mut draft = filled();
        draft.set_frequency(Some(Frequency::Monthly));
        assert!(draft.validate().is_ok());

        draft.subject.clear();
        let err = draft.validate().unwrap_err();
        assert!(err.is_empty_fields());
        assert_eq!(err.to_string(), "Empty Fields are not allowed");
    }

    #[test]
    fn test_patch_overwrites_only_given_fields() {
        let mut item = ScheduleItem {
            id: 1,
            title: "Standup".to_string(),
            description: "Daily sync".to_string(),
            subject: "Team".to_string(),
            recurrence: Recurrence::daily(),
            schedule: "9am".to_string(),
        };
        SchedulePatch::title("Standup Call").apply_to(&mut item);
        assert_eq!(item.title, "Standup Call");
        assert_eq!(item.description, "Daily sync");
        assert_eq!(item.frequency(), Frequency::Daily);
    }
}
