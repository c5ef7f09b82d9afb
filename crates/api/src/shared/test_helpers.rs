use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use workflowgo_domain::{Interview, ReminderTimezone, User};
use workflowgo_infra::{AppContext, ISys, InMemoryReminderChannel};

/// Clock that only moves when told to
pub struct MockSys {
    now: AtomicI64,
}

impl MockSys {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: AtomicI64::new(now.timestamp_millis()),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.store(now.timestamp_millis(), Ordering::SeqCst);
    }
}

impl ISys for MockSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

pub struct TestContext {
    pub ctx: AppContext,
    pub sys: Arc<MockSys>,
    pub channel: Arc<InMemoryReminderChannel>,
}

pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, hour, minute, 0).unwrap()
}

pub const INTERVIEW_DATE: &str = "2024-03-05";

pub fn setup(now: DateTime<Utc>) -> TestContext {
    let mut ctx = AppContext::create_inmemory();
    let sys = Arc::new(MockSys::new(now));
    let channel = Arc::new(InMemoryReminderChannel::new());
    ctx.sys = sys.clone();
    ctx.reminder_channel = channel.clone();
    ctx.config.timezone = ReminderTimezone::Named(chrono_tz::UTC);

    TestContext { ctx, sys, channel }
}

pub async fn insert_user(ctx: &AppContext, reminder_time: Option<&str>, notifications_enabled: bool) -> User {
    let mut user = User::new("Ada", "ada@example.com");
    user.preferences.reminder_time = reminder_time.map(String::from);
    user.preferences.notifications_enabled = notifications_enabled;
    ctx.repos.users.insert(&user).await.unwrap();
    user
}

pub async fn insert_interview(ctx: &AppContext, user: &User, company: &str, time: &str) -> Interview {
    let interview = Interview::new(user.id.clone(), company, "Backend Engineer", INTERVIEW_DATE, time);
    ctx.repos.interviews.insert(&interview).await.unwrap();
    interview
}
