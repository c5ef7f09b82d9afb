use super::INotificationRepo;
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;
use workflowgo_domain::{Notification, ID};

pub struct PostgresNotificationRepo {
    pool: PgPool,
}

impl PostgresNotificationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NotificationRaw {
    notification_uid: Uuid,
    user_uid: Uuid,
    title: String,
    message: String,
    kind: String,
    is_read: bool,
    created: i64,
    related_entity_id: Option<String>,
    related_entity_type: Option<String>,
}

impl TryFrom<NotificationRaw> for Notification {
    type Error = anyhow::Error;

    fn try_from(raw: NotificationRaw) -> anyhow::Result<Self> {
        let related_entity_type = match raw.related_entity_type {
            Some(entity_type) => Some(entity_type.parse()?),
            None => None,
        };
        Ok(Self {
            id: raw.notification_uid.into(),
            user_id: raw.user_uid.into(),
            title: raw.title,
            message: raw.message,
            kind: raw.kind.parse()?,
            is_read: raw.is_read,
            created_at: raw.created,
            related_entity_id: raw.related_entity_id,
            related_entity_type,
        })
    }
}

fn into_notification(raw: NotificationRaw) -> Option<Notification> {
    let notification_uid = raw.notification_uid;
    match Notification::try_from(raw) {
        Ok(notification) => Some(notification),
        Err(e) => {
            error!("Malformed notification {}: {:?}", notification_uid, e);
            None
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for PostgresNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications(notification_uid, user_uid, title, message, kind, is_read, created, related_entity_id, related_entity_type)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(*notification.id.inner_ref())
        .bind(*notification.user_id.inner_ref())
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.kind.as_str())
        .bind(notification.is_read)
        .bind(notification.created_at)
        .bind(&notification.related_entity_id)
        .bind(notification.related_entity_type.map(|t| t.as_str()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, notification_id: &ID) -> Option<Notification> {
        match sqlx::query_as::<_, NotificationRaw>(
            r#"
            SELECT * FROM notifications AS n
            WHERE n.notification_uid = $1
            "#,
        )
        .bind(*notification_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(notification) => notification.and_then(into_notification),
            Err(e) => {
                error!("Unable to find notification {}: {:?}", notification_id, e);
                None
            }
        }
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, NotificationRaw>(
            r#"
            SELECT * FROM notifications AS n
            WHERE n.user_uid = $1
            ORDER BY n.created DESC
            "#,
        )
        .bind(*user_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications
            .into_iter()
            .filter_map(into_notification)
            .collect())
    }

    async fn count_unread(&self, user_id: &ID) -> anyhow::Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM notifications AS n
            WHERE n.user_uid = $1 AND n.is_read = FALSE
            "#,
        )
        .bind(*user_id.inner_ref())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn mark_as_read(&self, notification_id: &ID) -> anyhow::Result<()> {
        sqlx::query("UPDATE notifications SET is_read = TRUE WHERE notification_uid = $1")
            .bind(*notification_id.inner_ref())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn mark_all_as_read(&self, user_id: &ID) -> anyhow::Result<()> {
        sqlx::query("UPDATE notifications SET is_read = TRUE WHERE user_uid = $1")
            .bind(*user_id.inner_ref())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, notification_id: &ID) -> Option<Notification> {
        match sqlx::query_as::<_, NotificationRaw>(
            r#"
            DELETE FROM notifications AS n
            WHERE n.notification_uid = $1
            RETURNING *
            "#,
        )
        .bind(*notification_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(notification) => notification.and_then(into_notification),
            Err(e) => {
                error!("Unable to delete notification {}: {:?}", notification_id, e);
                None
            }
        }
    }
}
