mod reminder_channel;

pub use reminder_channel::{
    IReminderChannel, InMemoryReminderChannel, LogReminderChannel, WebhookReminderChannel,
    WEBHOOK_KEY_HEADER,
};
