mod inmemory;
mod postgres;

pub use inmemory::InMemoryNotificationRepo;
pub use postgres::PostgresNotificationRepo;
use workflowgo_domain::{Notification, ID};

#[async_trait::async_trait]
pub trait INotificationRepo: Send + Sync {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()>;
    async fn find(&self, notification_id: &ID) -> Option<Notification>;
    /// Newest first
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Notification>>;
    async fn count_unread(&self, user_id: &ID) -> anyhow::Result<i64>;
    async fn mark_as_read(&self, notification_id: &ID) -> anyhow::Result<()>;
    async fn mark_all_as_read(&self, user_id: &ID) -> anyhow::Result<()>;
    async fn delete(&self, notification_id: &ID) -> Option<Notification>;
}
