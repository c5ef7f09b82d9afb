use crate::{
    interview::{InterviewSummary, InvalidVariantError},
    shared::entity::{Entity, ID},
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A persisted notification shown in the notification center of a `User`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: ID,
    pub user_id: ID,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub is_read: bool,
    /// Creation timestamp in millis
    pub created_at: i64,
    pub related_entity_id: Option<String>,
    pub related_entity_type: Option<RelatedEntityType>,
}

impl Notification {
    pub fn interview_reminder(user_id: ID, interview: &InterviewSummary, created_at: i64) -> Self {
        Self {
            id: Default::default(),
            user_id,
            title: format!("Interview Reminder: {}", interview.company_name),
            message: format!("{} interview at {}", interview.position, interview.time),
            kind: NotificationKind::Info,
            is_read: false,
            created_at,
            related_entity_id: Some(interview.interview_id.as_string()),
            related_entity_type: Some(RelatedEntityType::Interview),
        }
    }
}

impl Entity for Notification {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = InvalidVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(InvalidVariantError::new("notification type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelatedEntityType {
    Interview,
    Document,
    System,
}

impl RelatedEntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interview => "INTERVIEW",
            Self::Document => "DOCUMENT",
            Self::System => "SYSTEM",
        }
    }
}

impl FromStr for RelatedEntityType {
    type Err = InvalidVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INTERVIEW" => Ok(Self::Interview),
            "DOCUMENT" => Ok(Self::Document),
            "SYSTEM" => Ok(Self::System),
            _ => Err(InvalidVariantError::new("related entity type", s)),
        }
    }
}

/// Message pushed to a connected client of a `User`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientMessage {
    InterviewReminder(InterviewReminderPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewReminderPayload {
    pub id: String,
    pub interview: InterviewSummary,
    pub title: String,
    pub message: String,
    /// Lead time of the reminder, e.g. "60 minutes"
    pub reminder_label: String,
    pub notification: Notification,
}

impl InterviewReminderPayload {
    pub fn new(interview: InterviewSummary, reminder_label: &str, notification: Notification) -> Self {
        Self {
            id: ID::new().as_string(),
            interview,
            title: notification.title.clone(),
            message: notification.message.clone(),
            reminder_label: reminder_label.to_string(),
            notification,
        }
    }
}
