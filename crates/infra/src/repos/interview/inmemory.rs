use super::IInterviewRepo;
use crate::repos::shared::inmemory_repo::*;
use std::sync::Mutex;
use workflowgo_domain::{Interview, ID};

pub struct InMemoryInterviewRepo {
    interviews: Mutex<Vec<Interview>>,
}

impl InMemoryInterviewRepo {
    pub fn new() -> Self {
        Self {
            interviews: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IInterviewRepo for InMemoryInterviewRepo {
    async fn insert(&self, interview: &Interview) -> anyhow::Result<()> {
        insert(interview, &self.interviews);
        Ok(())
    }

    async fn save(&self, interview: &Interview) -> anyhow::Result<()> {
        save(interview, &self.interviews);
        Ok(())
    }

    async fn delete(&self, interview_id: &ID) -> Option<Interview> {
        delete(interview_id, &self.interviews)
    }

    async fn find(&self, interview_id: &ID) -> Option<Interview> {
        find(interview_id, &self.interviews)
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Interview>> {
        Ok(find_by(&self.interviews, |i| i.user_id == *user_id))
    }
}
