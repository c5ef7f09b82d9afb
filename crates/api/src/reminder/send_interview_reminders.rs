use super::dispatch_interview_reminder;
use crate::shared::usecase::UseCase;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use workflowgo_domain::{is_due, TrackedReminderKey, User};
use workflowgo_infra::AppContext;

/// Scans the `Interview`s of every `User` with notifications enabled and
/// reminds them of the interviews that are about to start.
///
/// A reminder is sent at most once per user and interview: the pair is
/// tracked in `NotifiedReminders` after a successful dispatch. A failed
/// dispatch is retried on the next run.
#[derive(Debug, Default)]
pub struct SendInterviewRemindersUseCase;

#[derive(Debug, Default, PartialEq)]
pub struct SendRemindersSummary {
    /// Users with notifications enabled
    pub users_scanned: usize,
    pub reminders_sent: usize,
    pub failures: usize,
}

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Unable to load users: {0}")]
    StorageError(String),
}

async fn send_user_reminders(
    user: &User,
    now: i64,
    ctx: &AppContext,
    summary: &mut SendRemindersSummary,
) -> anyhow::Result<()> {
    let lead_time = user.preferences.reminder_lead_time();
    let interviews = ctx.repos.interviews.find_by_user(&user.id).await?;

    for interview in interviews {
        let key = TrackedReminderKey::new(&user.id, &interview.id);
        if ctx.notified_reminders.contains(&key) {
            continue;
        }

        let scheduled_at = match interview.scheduled_at(&ctx.config.timezone) {
            Ok(scheduled_at) => scheduled_at.timestamp_millis(),
            Err(e) => {
                warn!("Skipping reminder check for interview {}: {}", interview.id, e);
                continue;
            }
        };
        if !is_due(scheduled_at, lead_time.minutes(), now) {
            continue;
        }

        match dispatch_interview_reminder(user, &interview.summary(), &lead_time.label(), ctx).await {
            Ok(_) => {
                ctx.notified_reminders.add(key);
                summary.reminders_sent += 1;
                info!(
                    "Sent reminder to user {} for interview {} (in {} min)",
                    user.id,
                    interview.id,
                    lead_time.minutes()
                );
            }
            Err(e) => {
                summary.failures += 1;
                error!(
                    "Unable to send reminder to user {} for interview {}: {:?}",
                    user.id, interview.id, e
                );
            }
        }
    }

    Ok(())
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendInterviewRemindersUseCase {
    type Response = SendRemindersSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "SendInterviewReminders";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        debug!("Checking for upcoming interviews");
        let users = ctx
            .repos
            .users
            .find_all()
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;
        let now = ctx.sys.get_timestamp_millis();

        let mut summary = SendRemindersSummary::default();
        for user in users
            .iter()
            .filter(|u| u.preferences.notifications_enabled)
        {
            summary.users_scanned += 1;
            if let Err(e) = send_user_reminders(user, now, ctx, &mut summary).await {
                summary.failures += 1;
                error!("Error processing reminders for user {}: {:?}", user.id, e);
            }
        }

        Ok(summary)
    }
}
