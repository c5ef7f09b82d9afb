use crate::{
    date::{parse_schedule, ReminderTimezone, ScheduleParseError},
    shared::entity::{Entity, ID},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A job interview tracked by a `User`.
///
/// `date` and `time` are kept as the wall-clock text entered by the user and
/// are only combined into an instant when reminders are computed.
#[derive(Debug, Clone)]
pub struct Interview {
    pub id: ID,
    pub user_id: ID,
    pub company_name: String,
    pub position: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub interview_type: InterviewType,
    pub status: InterviewStatus,
    pub location: Option<String>,
}

impl Interview {
    pub fn new(
        user_id: ID,
        company_name: impl Into<String>,
        position: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: Default::default(),
            user_id,
            company_name: company_name.into(),
            position: position.into(),
            date: date.into(),
            time: time.into(),
            interview_type: Default::default(),
            status: Default::default(),
            location: None,
        }
    }

    pub fn scheduled_at(&self, tz: &ReminderTimezone) -> Result<DateTime<Utc>, ScheduleParseError> {
        let datetime = parse_schedule(&self.date, &self.time)?;
        tz.resolve(&datetime).ok_or_else(|| {
            ScheduleParseError::NonExistentLocalTime(format!("{} {}", self.date, self.time))
        })
    }

    pub fn summary(&self) -> InterviewSummary {
        InterviewSummary {
            interview_id: self.id.clone(),
            company_name: self.company_name.clone(),
            position: self.position.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
        }
    }
}

impl Entity for Interview {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The part of an `Interview` that is sent along with a reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSummary {
    pub interview_id: ID,
    pub company_name: String,
    pub position: String,
    pub date: String,
    pub time: String,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid {kind}: `{value}`")]
pub struct InvalidVariantError {
    kind: &'static str,
    value: String,
}

impl InvalidVariantError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Scheduled,
    Confirmed,
    Completed,
    Rejected,
    Cancelled,
}

impl InterviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Default for InterviewStatus {
    fn default() -> Self {
        Self::Scheduled
    }
}

impl FromStr for InterviewStatus {
    type Err = InvalidVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(InvalidVariantError::new("interview status", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    Phone,
    Video,
    Onsite,
    Technical,
    Behavioral,
    Other,
}

impl InterviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Video => "video",
            Self::Onsite => "onsite",
            Self::Technical => "technical",
            Self::Behavioral => "behavioral",
            Self::Other => "other",
        }
    }
}

impl Default for InterviewType {
    fn default() -> Self {
        Self::Other
    }
}

impl FromStr for InterviewType {
    type Err = InvalidVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "phone" => Ok(Self::Phone),
            "video" => Ok(Self::Video),
            "onsite" => Ok(Self::Onsite),
            "technical" => Ok(Self::Technical),
            "behavioral" => Ok(Self::Behavioral),
            "other" => Ok(Self::Other),
            _ => Err(InvalidVariantError::new("interview type", s)),
        }
    }
}
