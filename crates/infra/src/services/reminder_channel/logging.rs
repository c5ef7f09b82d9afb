use super::{user_destination, IReminderChannel};
use tracing::info;
use workflowgo_domain::{ClientMessage, ID};

/// Used when no webhook is configured, deliveries only end up in the logs
pub struct LogReminderChannel;

#[async_trait::async_trait]
impl IReminderChannel for LogReminderChannel {
    async fn deliver(&self, user_id: &ID, message: &ClientMessage) -> anyhow::Result<()> {
        match message {
            ClientMessage::InterviewReminder(payload) => info!(
                "Interview reminder for {} ({}): {}",
                user_destination(user_id),
                payload.reminder_label,
                payload.title
            ),
        }
        Ok(())
    }
}
