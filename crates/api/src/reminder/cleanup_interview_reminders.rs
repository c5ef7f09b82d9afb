use crate::shared::usecase::UseCase;
use thiserror::Error;
use tracing::{debug, error};
use workflowgo_domain::{has_passed, TrackedReminderKey};
use workflowgo_infra::AppContext;

/// Forgets the tracked reminders of interviews that have already started,
/// so that the tracked set does not grow forever.
#[derive(Debug, Default)]
pub struct CleanupInterviewRemindersUseCase;

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Unable to load users: {0}")]
    StorageError(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for CleanupInterviewRemindersUseCase {
    /// Number of evicted reminder keys
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "CleanupInterviewReminders";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let users = ctx
            .repos
            .users
            .find_all()
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;
        let now = ctx.sys.get_timestamp_millis();

        let mut evicted = 0;
        for user in users {
            let interviews = match ctx.repos.interviews.find_by_user(&user.id).await {
                Ok(interviews) => interviews,
                Err(e) => {
                    error!("Unable to load interviews of user {}: {:?}", user.id, e);
                    continue;
                }
            };

            for interview in interviews {
                let key = TrackedReminderKey::new(&user.id, &interview.id);
                if !ctx.notified_reminders.contains(&key) {
                    continue;
                }
                // Keys of unparsable schedules are kept
                let passed = interview
                    .scheduled_at(&ctx.config.timezone)
                    .map(|at| has_passed(at.timestamp_millis(), now))
                    .unwrap_or(false);
                if passed && ctx.notified_reminders.remove(&key) {
                    evicted += 1;
                    debug!("Removed expired reminder key {}", key);
                }
            }
        }

        Ok(evicted)
    }
}
