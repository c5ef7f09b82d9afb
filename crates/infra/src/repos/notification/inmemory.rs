use super::INotificationRepo;
use crate::repos::shared::inmemory_repo::*;
use std::sync::Mutex;
use workflowgo_domain::{Notification, ID};

pub struct InMemoryNotificationRepo {
    notifications: Mutex<Vec<Notification>>,
}

impl InMemoryNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for InMemoryNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn find(&self, notification_id: &ID) -> Option<Notification> {
        find(notification_id, &self.notifications)
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Notification>> {
        let mut notifications = find_by(&self.notifications, |n| n.user_id == *user_id);
        notifications.sort_by(|n1, n2| n2.created_at.cmp(&n1.created_at));
        Ok(notifications)
    }

    async fn count_unread(&self, user_id: &ID) -> anyhow::Result<i64> {
        let unread = find_by(&self.notifications, |n| n.user_id == *user_id && !n.is_read);
        Ok(unread.len() as i64)
    }

    async fn mark_as_read(&self, notification_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.notifications,
            |n| n.id == *notification_id,
            |n| n.is_read = true,
        );
        Ok(())
    }

    async fn mark_all_as_read(&self, user_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.notifications,
            |n| n.user_id == *user_id,
            |n| n.is_read = true,
        );
        Ok(())
    }

    async fn delete(&self, notification_id: &ID) -> Option<Notification> {
        delete(notification_id, &self.notifications)
    }
}
