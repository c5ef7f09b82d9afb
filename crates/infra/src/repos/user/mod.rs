mod inmemory;
mod postgres;

pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;
use workflowgo_domain::{User, ID};

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn delete(&self, user_id: &ID) -> Option<User>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    /// All users regardless of their notification preferences
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;
}

#[cfg(test)]
mod tests {
    use crate::AppContext;
    use workflowgo_domain::User;

    #[tokio::test]
    async fn test_user_crud() {
        let ctx = AppContext::create_inmemory();

        let mut user = User::new("Grace", "grace@example.com");
        ctx.repos.users.insert(&user).await.expect("To insert user");
        let other = User::new("Alan", "alan@example.com");
        ctx.repos.users.insert(&other).await.expect("To insert user");

        let found = ctx.repos.users.find(&user.id).await.expect("To find user");
        assert_eq!(found.email, "grace@example.com");
        assert!(found.preferences.notifications_enabled);

        user.preferences.notifications_enabled = false;
        user.preferences.reminder_time = Some("1day".into());
        ctx.repos.users.save(&user).await.expect("To save user");
        let found = ctx.repos.users.find(&user.id).await.expect("To find user");
        assert_eq!(found.preferences, user.preferences);

        assert_eq!(ctx.repos.users.find_all().await.unwrap().len(), 2);

        let deleted = ctx.repos.users.delete(&user.id).await.expect("To delete user");
        assert_eq!(deleted.id, user.id);
        assert!(ctx.repos.users.find(&user.id).await.is_none());
        assert!(ctx.repos.users.delete(&user.id).await.is_none());
        assert_eq!(ctx.repos.users.find_all().await.unwrap().len(), 1);
    }
}
