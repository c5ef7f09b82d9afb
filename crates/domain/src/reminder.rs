use crate::shared::entity::ID;
use std::fmt::Display;

const MILLIS_PER_MINUTE: i64 = 60 * 1000;

/// How long before an `Interview` the owning `User` wants to be reminded.
///
/// Stored on `UserPreferences` as a string token. Unknown or missing tokens
/// fall back to thirty minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderLeadTime {
    ThirtyMinutes,
    OneHour,
    ThreeHours,
    OneDay,
    TwoDays,
}

impl ReminderLeadTime {
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("1hour") => Self::OneHour,
            Some("3hours") => Self::ThreeHours,
            Some("1day") => Self::OneDay,
            Some("2days") => Self::TwoDays,
            _ => Self::ThirtyMinutes,
        }
    }

    pub fn minutes(&self) -> i64 {
        match self {
            Self::ThirtyMinutes => 30,
            Self::OneHour => 60,
            Self::ThreeHours => 180,
            Self::OneDay => 1440,
            Self::TwoDays => 2880,
        }
    }

    /// Human readable lead time sent along with the reminder, e.g. "60 minutes"
    pub fn label(&self) -> String {
        format!("{} minutes", self.minutes())
    }
}

impl Default for ReminderLeadTime {
    fn default() -> Self {
        Self::ThirtyMinutes
    }
}

pub fn resolve_lead_minutes(token: Option<&str>) -> i64 {
    ReminderLeadTime::from_token(token).minutes()
}

/// A reminder is due in the half-open window
/// `[scheduled_at - lead_minutes, scheduled_at)`. All timestamps are in millis.
pub fn is_due(scheduled_at: i64, lead_minutes: i64, now: i64) -> bool {
    let remind_at = scheduled_at - lead_minutes * MILLIS_PER_MINUTE;
    now >= remind_at && now < scheduled_at
}

pub fn has_passed(scheduled_at: i64, now: i64) -> bool {
    now >= scheduled_at
}

/// Identifies a reminder that has already been delivered to a `User`
/// for one of their `Interview`s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackedReminderKey {
    pub user_id: ID,
    pub interview_id: ID,
}

impl TrackedReminderKey {
    pub fn new(user_id: &ID, interview_id: &ID) -> Self {
        Self {
            user_id: user_id.clone(),
            interview_id: interview_id.clone(),
        }
    }
}

impl Display for TrackedReminderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.user_id, self.interview_id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const T: i64 = 1_709_650_800_000; // 2024-03-05T15:00:00Z

    fn minutes(m: i64) -> i64 {
        m * MILLIS_PER_MINUTE
    }

    #[test]
    fn it_resolves_lead_time_tokens() {
        assert_eq!(resolve_lead_minutes(Some("1hour")), 60);
        assert_eq!(resolve_lead_minutes(Some("3hours")), 180);
        assert_eq!(resolve_lead_minutes(Some("1day")), 1440);
        assert_eq!(resolve_lead_minutes(Some("2days")), 2880);
        assert_eq!(resolve_lead_minutes(None), 30);
        assert_eq!(resolve_lead_minutes(Some("")), 30);
        assert_eq!(resolve_lead_minutes(Some("bogus")), 30);
        // Tokens are matched exactly
        assert_eq!(resolve_lead_minutes(Some("1HOUR")), 30);
        assert_eq!(resolve_lead_minutes(Some("1h")), 30);
    }

    #[test]
    fn it_labels_lead_times_in_minutes() {
        assert_eq!(ReminderLeadTime::OneHour.label(), "60 minutes");
        assert_eq!(ReminderLeadTime::default().label(), "30 minutes");
        assert_eq!(ReminderLeadTime::TwoDays.label(), "2880 minutes");
    }

    #[test]
    fn due_window_is_half_open() {
        assert!(is_due(T, 30, T - minutes(30)));
        assert!(is_due(T, 30, T - minutes(1)));
        assert!(is_due(T, 30, T - 1));
        assert!(!is_due(T, 30, T - minutes(31)));
        assert!(!is_due(T, 30, T - minutes(30) - 1));
        assert!(!is_due(T, 30, T));
        assert!(!is_due(T, 30, T + minutes(1)));
    }

    #[test]
    fn due_window_follows_lead_time() {
        let two_days = ReminderLeadTime::TwoDays.minutes();
        assert!(is_due(T, two_days, T - minutes(2880)));
        assert!(!is_due(T, two_days, T - minutes(2881)));
        assert!(!is_due(T, 0, T));
    }

    #[test]
    fn it_detects_passed_interviews() {
        assert!(!has_passed(T, T - 1));
        assert!(has_passed(T, T));
        assert!(has_passed(T, T + minutes(5)));
    }

    #[test]
    fn tracked_key_display_joins_user_and_interview() {
        let user_id = ID::new();
        let interview_id = ID::new();
        let key = TrackedReminderKey::new(&user_id, &interview_id);
        assert_eq!(key.to_string(), format!("{}-{}", user_id, interview_id));
        assert_eq!(key, TrackedReminderKey::new(&user_id, &interview_id));
        assert_ne!(key, TrackedReminderKey::new(&interview_id, &user_id));
    }
}
