mod inmemory;
mod postgres;

pub use inmemory::InMemoryInterviewRepo;
pub use postgres::PostgresInterviewRepo;
use workflowgo_domain::{Interview, ID};

#[async_trait::async_trait]
pub trait IInterviewRepo: Send + Sync {
    async fn insert(&self, interview: &Interview) -> anyhow::Result<()>;
    async fn save(&self, interview: &Interview) -> anyhow::Result<()>;
    async fn delete(&self, interview_id: &ID) -> Option<Interview>;
    async fn find(&self, interview_id: &ID) -> Option<Interview>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Interview>>;
}
