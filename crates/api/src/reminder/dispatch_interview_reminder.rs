use anyhow::Context;
use workflowgo_domain::{
    ClientMessage, InterviewReminderPayload, InterviewSummary, Notification, User,
};
use workflowgo_infra::AppContext;

/// Stores a reminder `Notification` for the `User` and pushes it to their
/// connected clients. An error means the reminder should be retried later,
/// in which case no notification is left stored.
pub async fn dispatch_interview_reminder(
    user: &User,
    interview: &InterviewSummary,
    lead_label: &str,
    ctx: &AppContext,
) -> anyhow::Result<Notification> {
    let notification =
        Notification::interview_reminder(user.id.clone(), interview, ctx.sys.get_timestamp_millis());
    ctx.repos
        .notifications
        .insert(&notification)
        .await
        .context("Unable to store interview reminder notification")?;

    let message = ClientMessage::InterviewReminder(InterviewReminderPayload::new(
        interview.clone(),
        lead_label,
        notification.clone(),
    ));
    if let Err(e) = ctx.reminder_channel.deliver(&user.id, &message).await {
        // The reminder is retried on a later run which stores a new notification
        ctx.repos.notifications.delete(&notification.id).await;
        return Err(e.context("Unable to deliver interview reminder"));
    }

    Ok(notification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::*;

    #[actix_web::test]
    async fn it_stores_and_delivers_reminder() {
        let test = setup(at(14, 5));
        let user = insert_user(&test.ctx, Some("1hour"), true).await;
        let interview = insert_interview(&test.ctx, &user, "Acme", "15:00").await;

        let notification =
            dispatch_interview_reminder(&user, &interview.summary(), "60 minutes", &test.ctx)
                .await
                .expect("To dispatch reminder");
        assert_eq!(notification.created_at, at(14, 5).timestamp_millis());

        let stored = test
            .ctx
            .repos
            .notifications
            .find_by_user(&user.id)
            .await
            .unwrap();
        assert_eq!(stored, vec![notification.clone()]);

        let deliveries = test.channel.deliveries();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].0, user.id);
        match &deliveries[0].1 {
            ClientMessage::InterviewReminder(payload) => {
                assert_eq!(payload.reminder_label, "60 minutes");
                assert_eq!(payload.interview, interview.summary());
                assert_eq!(payload.title, "Interview Reminder: Acme");
                assert_eq!(payload.message, "Backend Engineer interview at 15:00");
                assert_eq!(payload.notification, notification);
            }
        }
    }

    #[actix_web::test]
    async fn it_fails_when_delivery_fails() {
        let test = setup(at(14, 5));
        let user = insert_user(&test.ctx, None, true).await;
        let interview = insert_interview(&test.ctx, &user, "Acme", "15:00").await;
        test.channel.set_failing(true);

        let res =
            dispatch_interview_reminder(&user, &interview.summary(), "30 minutes", &test.ctx).await;
        assert!(res.is_err());
        assert!(test.channel.deliveries().is_empty());
        assert!(test
            .ctx
            .repos
            .notifications
            .find_by_user(&user.id)
            .await
            .unwrap()
            .is_empty());
    }
}
