//! Once-a-day trigger at a fixed wall-clock time in a fixed timezone.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::future::Future;
use tracing::info;

/// First instant strictly after `now` whose local time in `tz` is `at`.
/// Days on which `at` falls in a DST gap are skipped.
pub fn next_run_after(now: DateTime<Utc>, at: NaiveTime, tz: Tz) -> DateTime<Utc> {
    let mut date = now.with_timezone(&tz).date_naive();
    // A DST gap can swallow at most one day's slot; three days is plenty.
    for _ in 0..3 {
        if let Some(candidate) = tz.from_local_datetime(&date.and_time(at)).earliest() {
            let candidate = candidate.with_timezone(&Utc);
            if candidate > now {
                return candidate;
            }
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    now + chrono::Duration::days(1)
}

/// Run `job` every day at `at` local time, forever. The job decides how
/// to handle its own failures; the loop only waits for the next slot.
pub async fn run_daily<F, Fut>(at: NaiveTime, tz: Tz, mut job: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    loop {
        let now = Utc::now();
        let next = next_run_after(now, at, tz);
        info!(
            next_run = %next.with_timezone(&tz).format("%Y-%m-%d %H:%M %Z"),
            "Waiting for next scheduled run"
        );
        let wait = (next - now).to_std().unwrap_or_default();
        tokio::time::sleep(wait).await;
        job().await;
    }
}
