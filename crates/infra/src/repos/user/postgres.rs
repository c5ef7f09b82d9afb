use super::IUserRepo;
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;
use workflowgo_domain::{User, UserPreferences, ID};

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    name: String,
    email: String,
    notifications_enabled: bool,
    reminder_time: Option<String>,
}

impl From<UserRaw> for User {
    fn from(raw: UserRaw) -> Self {
        Self {
            id: raw.user_uid.into(),
            name: raw.name,
            email: raw.email,
            preferences: UserPreferences {
                notifications_enabled: raw.notifications_enabled,
                reminder_time: raw.reminder_time,
            },
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_uid, name, email, notifications_enabled, reminder_time)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*user.id.inner_ref())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.preferences.notifications_enabled)
        .bind(&user.preferences.reminder_time)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET name = $2,
            email = $3,
            notifications_enabled = $4,
            reminder_time = $5
            WHERE user_uid = $1
            "#,
        )
        .bind(*user.id.inner_ref())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.preferences.notifications_enabled)
        .bind(&user.preferences.reminder_time)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        match sqlx::query_as::<_, UserRaw>(
            r#"
            DELETE FROM users AS u
            WHERE u.user_uid = $1
            RETURNING *
            "#,
        )
        .bind(*user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(user) => user.map(|u| u.into()),
            Err(e) => {
                error!("Unable to delete user {}: {:?}", user_id, e);
                None
            }
        }
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        match sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users AS u
            WHERE u.user_uid = $1
            "#,
        )
        .bind(*user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(user) => user.map(|u| u.into()),
            Err(e) => {
                error!("Unable to find user {}: {:?}", user_id, e);
                None
            }
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, UserRaw>("SELECT * FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(users.into_iter().map(|u| u.into()).collect())
    }
}
