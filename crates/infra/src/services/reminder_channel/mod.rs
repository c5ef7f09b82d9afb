mod inmemory;
mod logging;
mod webhook;

pub use inmemory::InMemoryReminderChannel;
pub use logging::LogReminderChannel;
pub use webhook::{WebhookReminderChannel, WEBHOOK_KEY_HEADER};
use workflowgo_domain::{ClientMessage, ID};

/// Delivers a `ClientMessage` to the connected clients of a `User`
#[async_trait::async_trait]
pub trait IReminderChannel: Send + Sync {
    async fn deliver(&self, user_id: &ID, message: &ClientMessage) -> anyhow::Result<()>;
}

/// Per user destination on the receiving side
fn user_destination(user_id: &ID) -> String {
    format!("/queue/user.{}", user_id)
}
