mod interview;
mod notification;
mod shared;
mod user;

pub use interview::IInterviewRepo;
use interview::{InMemoryInterviewRepo, PostgresInterviewRepo};
pub use notification::INotificationRepo;
use notification::{InMemoryNotificationRepo, PostgresNotificationRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
pub use user::IUserRepo;
use user::{InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub interviews: Arc<dyn IInterviewRepo>,
    pub notifications: Arc<dyn INotificationRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        sqlx::migrate!().run(&pool).await?;

        Ok(Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            interviews: Arc::new(PostgresInterviewRepo::new(pool.clone())),
            notifications: Arc::new(PostgresNotificationRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            interviews: Arc::new(InMemoryInterviewRepo::new()),
            notifications: Arc::new(InMemoryNotificationRepo::new()),
        }
    }
}
