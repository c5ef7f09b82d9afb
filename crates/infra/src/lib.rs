mod config;
mod reminder_tracker;
mod repos;
mod services;
mod system;

pub use config::{Config, WebhookSettings};
pub use reminder_tracker::NotifiedReminders;
pub use repos::{IInterviewRepo, INotificationRepo, IUserRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys};
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub reminder_channel: Arc<dyn IReminderChannel>,
    /// Reminders delivered since the process started
    pub notified_reminders: Arc<NotifiedReminders>,
}

struct ContextParams {
    pub postgres_connection_string: Option<String>,
}

impl AppContext {
    fn with_repos(repos: Repos) -> Self {
        let config = Config::new();
        let reminder_channel: Arc<dyn IReminderChannel> = match &config.webhook {
            Some(webhook) => match WebhookReminderChannel::new(webhook.clone()) {
                Ok(channel) => Arc::new(channel),
                Err(e) => {
                    warn!("Unable to create webhook client, interview reminders will only be logged: {:?}", e);
                    Arc::new(LogReminderChannel)
                }
            },
            None => {
                info!("No REMINDER_WEBHOOK_URL configured, interview reminders will only be logged.");
                Arc::new(LogReminderChannel)
            }
        };
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            reminder_channel,
            notified_reminders: Arc::new(NotifiedReminders::new()),
        }
    }

    pub fn create_inmemory() -> Self {
        Self::with_repos(Repos::create_inmemory())
    }

    async fn create(params: ContextParams) -> Self {
        match params.postgres_connection_string {
            Some(connection_string) => {
                let repos = Repos::create_postgres(&connection_string)
                    .await
                    .expect("Postgres credentials must be valid");
                Self::with_repos(repos)
            }
            None => {
                info!("DATABASE_URL is not set, using inmemory repositories.");
                Self::create_inmemory()
            }
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> AppContext {
    AppContext::create(ContextParams {
        postgres_connection_string: std::env::var("DATABASE_URL").ok(),
    })
    .await
}
