use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use workflowgo_api::Application;
use workflowgo_domain::ReminderTimezone;
use workflowgo_infra::{AppContext, ISys, InMemoryReminderChannel};

pub struct TestApp {
    pub address: String,
    pub ctx: AppContext,
}

// Launch the application as a background task
pub async fn spawn_app() -> TestApp {
    let mut ctx = AppContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp { address, ctx }
}

pub struct SimulatedClock {
    now: AtomicI64,
}

impl SimulatedClock {
    pub fn set(&self, now: DateTime<Utc>) {
        self.now.store(now.timestamp_millis(), Ordering::SeqCst);
    }
}

impl ISys for SimulatedClock {
    fn get_timestamp_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

pub struct ReminderTestContext {
    pub ctx: AppContext,
    pub clock: Arc<SimulatedClock>,
    pub channel: Arc<InMemoryReminderChannel>,
}

/// Context with in-memory storage, a clock starting at `now` and a channel
/// that records delivered reminders. Interviews are read as Oslo wall-clock
/// times.
pub fn reminder_context(now: DateTime<Utc>) -> ReminderTestContext {
    let mut ctx = AppContext::create_inmemory();
    let clock = Arc::new(SimulatedClock {
        now: AtomicI64::new(now.timestamp_millis()),
    });
    let channel = Arc::new(InMemoryReminderChannel::new());
    ctx.sys = clock.clone();
    ctx.reminder_channel = channel.clone();
    ctx.config.timezone = ReminderTimezone::Named(chrono_tz::Europe::Oslo);

    ReminderTestContext {
        ctx,
        clock,
        channel,
    }
}

/// Oslo wall-clock time on 2024-06-10
pub fn oslo(hour: u32, minute: u32) -> DateTime<Utc> {
    chrono_tz::Europe::Oslo
        .with_ymd_and_hms(2024, 6, 10, hour, minute, 0)
        .unwrap()
        .with_timezone(&Utc)
}

pub const TODAY: &str = "2024-06-10";
