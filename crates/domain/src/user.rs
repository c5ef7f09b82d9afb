use crate::{
    reminder::ReminderLeadTime,
    shared::entity::{Entity, ID},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub preferences: UserPreferences,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            email: email.into(),
            preferences: Default::default(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Notification settings of a `User`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub notifications_enabled: bool,
    /// Lead time token, see `ReminderLeadTime::from_token`
    #[serde(default)]
    pub reminder_time: Option<String>,
}

impl UserPreferences {
    pub fn reminder_lead_time(&self) -> ReminderLeadTime {
        ReminderLeadTime::from_token(self.reminder_time.as_deref())
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            reminder_time: None,
        }
    }
}
