mod date;
mod interview;
mod notification;
mod reminder;
mod shared;
mod user;

pub use date::{parse_schedule, ReminderTimezone, ScheduleParseError};
pub use interview::{Interview, InterviewStatus, InterviewSummary, InterviewType, InvalidVariantError};
pub use notification::{
    ClientMessage, InterviewReminderPayload, Notification, NotificationKind, RelatedEntityType,
};
pub use reminder::{has_passed, is_due, resolve_lead_minutes, ReminderLeadTime, TrackedReminderKey};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::{User, UserPreferences};
