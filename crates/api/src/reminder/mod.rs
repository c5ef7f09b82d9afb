mod cleanup_interview_reminders;
mod dispatch_interview_reminder;
mod send_interview_reminders;

pub use cleanup_interview_reminders::CleanupInterviewRemindersUseCase;
pub use dispatch_interview_reminder::dispatch_interview_reminder;
pub use send_interview_reminders::{SendInterviewRemindersUseCase, SendRemindersSummary};
