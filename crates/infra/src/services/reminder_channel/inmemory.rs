use super::IReminderChannel;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use workflowgo_domain::{ClientMessage, ID};

/// Keeps every delivered message in memory. Can be told to fail in order to
/// simulate an unreachable client.
#[derive(Default)]
pub struct InMemoryReminderChannel {
    deliveries: Mutex<Vec<(ID, ClientMessage)>>,
    failing: AtomicBool,
}

impl InMemoryReminderChannel {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn deliveries(&self) -> Vec<(ID, ClientMessage)> {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait::async_trait]
impl IReminderChannel for InMemoryReminderChannel {
    async fn deliver(&self, user_id: &ID, message: &ClientMessage) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("Client of user {} is not reachable", user_id);
        }
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((user_id.clone(), message.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workflowgo_domain::{Interview, InterviewReminderPayload, Notification};

    fn message(user_id: &ID) -> ClientMessage {
        let interview = Interview::new(user_id.clone(), "Acme", "Engineer", "2024-03-05", "15:00");
        let notification = Notification::interview_reminder(user_id.clone(), &interview.summary(), 0);
        ClientMessage::InterviewReminder(InterviewReminderPayload::new(
            interview.summary(),
            "30 minutes",
            notification,
        ))
    }

    #[tokio::test]
    async fn it_records_deliveries_until_failing() {
        let channel = InMemoryReminderChannel::new();
        let user_id = ID::new();

        channel.deliver(&user_id, &message(&user_id)).await.unwrap();
        assert_eq!(channel.deliveries().len(), 1);
        assert_eq!(channel.deliveries()[0].0, user_id);

        channel.set_failing(true);
        assert!(channel.deliver(&user_id, &message(&user_id)).await.is_err());
        assert_eq!(channel.deliveries().len(), 1);
    }
}
