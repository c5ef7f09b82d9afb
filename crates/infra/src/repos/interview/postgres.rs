use super::IInterviewRepo;
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;
use workflowgo_domain::{Interview, ID};

pub struct PostgresInterviewRepo {
    pool: PgPool,
}

impl PostgresInterviewRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct InterviewRaw {
    interview_uid: Uuid,
    user_uid: Uuid,
    company_name: String,
    position: String,
    scheduled_date: String,
    scheduled_time: String,
    interview_type: String,
    status: String,
    location: Option<String>,
}

impl From<InterviewRaw> for Interview {
    fn from(raw: InterviewRaw) -> Self {
        Self {
            id: raw.interview_uid.into(),
            user_id: raw.user_uid.into(),
            company_name: raw.company_name,
            position: raw.position,
            date: raw.scheduled_date,
            time: raw.scheduled_time,
            // Unknown labels should not hide the interview from reminders
            interview_type: raw.interview_type.parse().unwrap_or_default(),
            status: raw.status.parse().unwrap_or_default(),
            location: raw.location,
        }
    }
}

#[async_trait::async_trait]
impl IInterviewRepo for PostgresInterviewRepo {
    async fn insert(&self, interview: &Interview) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO interviews(interview_uid, user_uid, company_name, position, scheduled_date, scheduled_time, interview_type, status, location)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(*interview.id.inner_ref())
        .bind(*interview.user_id.inner_ref())
        .bind(&interview.company_name)
        .bind(&interview.position)
        .bind(&interview.date)
        .bind(&interview.time)
        .bind(interview.interview_type.as_str())
        .bind(interview.status.as_str())
        .bind(&interview.location)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, interview: &Interview) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE interviews
            SET company_name = $2,
            position = $3,
            scheduled_date = $4,
            scheduled_time = $5,
            interview_type = $6,
            status = $7,
            location = $8
            WHERE interview_uid = $1
            "#,
        )
        .bind(*interview.id.inner_ref())
        .bind(&interview.company_name)
        .bind(&interview.position)
        .bind(&interview.date)
        .bind(&interview.time)
        .bind(interview.interview_type.as_str())
        .bind(interview.status.as_str())
        .bind(&interview.location)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, interview_id: &ID) -> Option<Interview> {
        match sqlx::query_as::<_, InterviewRaw>(
            r#"
            DELETE FROM interviews AS i
            WHERE i.interview_uid = $1
            RETURNING *
            "#,
        )
        .bind(*interview_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(interview) => interview.map(|i| i.into()),
            Err(e) => {
                error!("Unable to delete interview {}: {:?}", interview_id, e);
                None
            }
        }
    }

    async fn find(&self, interview_id: &ID) -> Option<Interview> {
        match sqlx::query_as::<_, InterviewRaw>(
            r#"
            SELECT * FROM interviews AS i
            WHERE i.interview_uid = $1
            "#,
        )
        .bind(*interview_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(interview) => interview.map(|i| i.into()),
            Err(e) => {
                error!("Unable to find interview {}: {:?}", interview_id, e);
                None
            }
        }
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Interview>> {
        let interviews = sqlx::query_as::<_, InterviewRaw>(
            r#"
            SELECT * FROM interviews AS i
            WHERE i.user_uid = $1
            "#,
        )
        .bind(*user_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        Ok(interviews.into_iter().map(|i| i.into()).collect())
    }
}
