use crate::{
    reminder::{CleanupInterviewRemindersUseCase, SendInterviewRemindersUseCase},
    shared::usecase::execute,
};
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};
use workflowgo_infra::AppContext;

/// Seconds to wait so that a job starts `secs_before_min` seconds before the
/// next whole minute
pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

// Each tick is awaited before the next one is taken so that two runs of the
// same job never overlap. Ticks missed meanwhile are delayed, not bursted.

pub fn start_send_reminders_job(ctx: AppContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        let period = Duration::from_secs(ctx.config.reminder_scan_interval_secs);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run as u64);
        info!(
            "Interview reminder scan starts in {} seconds and runs every {} seconds",
            secs_to_next_run,
            period.as_secs()
        );

        let mut scan_interval = interval_at(start, period);
        scan_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            scan_interval.tick().await;
            if let Ok(summary) = execute(SendInterviewRemindersUseCase, &ctx).await {
                debug!("Interview reminder scan done: {:?}", summary);
            }
        }
    });
}

pub fn start_reminders_cleanup_job(ctx: AppContext) {
    actix_web::rt::spawn(async move {
        let period = Duration::from_secs(ctx.config.reminder_cleanup_interval_secs);
        let mut cleanup_interval = interval_at(Instant::now() + period, period);
        cleanup_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            cleanup_interval.tick().await;
            if let Ok(evicted) = execute(CleanupInterviewRemindersUseCase, &ctx).await {
                debug!(
                    "Evicted {} expired reminder keys, {} still tracked",
                    evicted,
                    ctx.notified_reminders.len()
                );
            }
        }
    });
}
