//! Schedule Entity
//!
//! A recurring schedule item and its frequency/repeat model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// Top-level recurrence category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
        }
    }

    /// Parse a select value. Blank means "not selected yet".
    pub fn from_label(s: &str) -> DomainResult<Option<Self>> {
        match s.trim() {
            "" => Ok(None),
            "Daily" => Ok(Some(Frequency::Daily)),
            "Weekly" => Ok(Some(Frequency::Weekly)),
            "Monthly" => Ok(Some(Frequency::Monthly)),
            other => Err(DomainError::InvalidInput(format!("unknown frequency '{}'", other))),
        }
    }

    /// Every repeat rule valid for this frequency, in display order
    pub fn repeat_options(&self) -> Vec<Repeat> {
        match self {
            Frequency::Daily => vec![Repeat::Daily(AllDays)],
            Frequency::Weekly => Weekday::ALL.iter().copied().map(Repeat::Weekly).collect(),
            Frequency::Monthly => MonthlyRule::ALL.iter().copied().map(Repeat::Monthly).collect(),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The only repeat rule of a daily schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllDays;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthlyRule {
    FirstMonday,
    LastFriday,
}

impl MonthlyRule {
    pub const ALL: [MonthlyRule; 2] = [MonthlyRule::FirstMonday, MonthlyRule::LastFriday];

    pub fn label(&self) -> &'static str {
        match self {
            MonthlyRule::FirstMonday => "First Monday",
            MonthlyRule::LastFriday => "Last Friday",
        }
    }
}

/// A repeat rule, tagged by the frequency it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repeat {
    Daily(AllDays),
    Weekly(Weekday),
    Monthly(MonthlyRule),
}

impl Repeat {
    pub fn frequency(&self) -> Frequency {
        match self {
            Repeat::Daily(_) => Frequency::Daily,
            Repeat::Weekly(_) => Frequency::Weekly,
            Repeat::Monthly(_) => Frequency::Monthly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Repeat::Daily(AllDays) => "All Days",
            Repeat::Weekly(day) => day.label(),
            Repeat::Monthly(rule) => rule.label(),
        }
    }

    /// Resolve a select value within the domain of `frequency`.
    ///
    /// Blank means "not selected yet"; a label from another frequency's
    /// domain is rejected.
    pub fn parse_for(frequency: Frequency, s: &str) -> DomainResult<Option<Self>> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        frequency
            .repeat_options()
            .into_iter()
            .find(|r| r.label() == s)
            .map(Some)
            .ok_or_else(|| {
                DomainError::InvalidInput(format!("'{}' is not a valid repeat for {}", s, frequency))
            })
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A frequency together with an optional repeat rule from its domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Recurrence {
    frequency: Frequency,
    repeat: Option<Repeat>,
}

impl Recurrence {
    pub fn new(frequency: Frequency, repeat: Option<Repeat>) -> DomainResult<Self> {
        match repeat {
            Some(r) if r.frequency() != frequency => Err(DomainError::InvalidInput(format!(
                "repeat '{}' does not belong to {}",
                r, frequency
            ))),
            _ => Ok(Self { frequency, repeat }),
        }
    }

    pub fn daily() -> Self {
        Self { frequency: Frequency::Daily, repeat: Some(Repeat::Daily(AllDays)) }
    }

    pub fn weekly(day: Weekday) -> Self {
        Self { frequency: Frequency::Weekly, repeat: Some(Repeat::Weekly(day)) }
    }

    pub fn monthly(rule: MonthlyRule) -> Self {
        Self { frequency: Frequency::Monthly, repeat: Some(Repeat::Monthly(rule)) }
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn repeat(&self) -> Option<Repeat> {
        self.repeat
    }
}

/// A recurring schedule item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ScheduleRecord", into = "ScheduleRecord")]
pub struct ScheduleItem {
    /// Unique identifier
    pub id: u32,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub recurrence: Recurrence,
    /// Free-text schedule, e.g. "9am"
    pub schedule: String,
}

impl ScheduleItem {
    pub fn frequency(&self) -> Frequency {
        self.recurrence.frequency()
    }

    pub fn repeat(&self) -> Option<Repeat> {
        self.recurrence.repeat()
    }

    /// Case-insensitive substring match over the searchable text fields.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.description, &self.subject, &self.schedule]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Entity for ScheduleItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Flat wire shape of a schedule item (seed file and serialization)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRecord {
    id: u32,
    title: String,
    description: String,
    subject: String,
    frequency: String,
    #[serde(default)]
    repeat: String,
    schedule: String,
}

impl TryFrom<ScheduleRecord> for ScheduleItem {
    type Error = DomainError;

    fn try_from(record: ScheduleRecord) -> Result<Self, Self::Error> {
        let frequency = Frequency::from_label(&record.frequency)?.ok_or_else(|| {
            DomainError::InvalidInput(format!("item {} has no frequency", record.id))
        })?;
        let repeat = Repeat::parse_for(frequency, &record.repeat)?;
        Ok(ScheduleItem {
            id: record.id,
            title: record.title,
            description: record.description,
            subject: record.subject,
            recurrence: Recurrence::new(frequency, repeat)?,
            schedule: record.schedule,
        })
    }
}

impl From<ScheduleItem> for ScheduleRecord {
    fn from(item: ScheduleItem) -> Self {
        ScheduleRecord {
            id: item.id,
            frequency: item.frequency().label().to_string(),
            repeat: item.repeat().map(|r| r.label().to_string()).unwrap_or_default(),
            title: item.title,
            description: item.description,
            subject: item.subject,
            schedule: item.schedule,
        }
    }
}
