//! Schedule lifecycle classification
//!
//! Maps a schedule record and a reference instant to exactly one lifecycle
//! state. The rule order is a contract, not an implementation detail: a
//! schedule can satisfy "today" and "start time passed" at once, so the
//! today-specific rules must win over the generic overdue rule. Otherwise a
//! same-day visit would flip to Overdue the moment its start time passes, and
//! an ongoing visit would be reported overdue because its start instant is in
//! the past.

use crate::domain::schedule::{Schedule, ScheduleStatus};
use chrono::NaiveDateTime;
use tracing::trace;

/// Classify a schedule against a reference instant (local wall clock).
///
/// Calendar-day granularity with no timezone normalization, matching the
/// console's observed behavior. First matching rule wins:
/// 1. inactive
/// 2. today and start <= now <= end (both bounds inclusive)
/// 3. today and now < start
/// 4. start instant already passed on any day
/// 5. everything else is upcoming
pub fn classify(schedule: &Schedule, now: NaiveDateTime) -> ScheduleStatus {
    let status = classify_inner(schedule, now);

    trace!(
        schedule_id = %schedule.id,
        asset_id = %schedule.asset_id,
        status = %status.as_str(),
        "schedule_classified"
    );

    status
}

fn classify_inner(schedule: &Schedule, now: NaiveDateTime) -> ScheduleStatus {
    if !schedule.is_active {
        return ScheduleStatus::Inactive;
    }

    let start = schedule.scheduled_date.and_time(schedule.start_time);
    let end = schedule.scheduled_date.and_time(schedule.end_time);
    let is_today = schedule.scheduled_date == now.date();

    if is_today && start <= now && now <= end {
        return ScheduleStatus::TodayOngoing;
    }

    if is_today && now < start {
        return ScheduleStatus::TodayNotStarted;
    }

    if start < now {
        return ScheduleStatus::Overdue;
    }

    ScheduleStatus::Upcoming
}

/// Select the schedules that are currently ongoing.
///
/// Used by bulk notification to pick the visits whose assigned technicians
/// should be pinged right now.
pub fn ongoing<'a>(
    schedules: impl IntoIterator<Item = &'a Schedule>,
    now: NaiveDateTime,
) -> Vec<&'a Schedule> {
    schedules
        .into_iter()
        .filter(|s| classify(s, now) == ScheduleStatus::TodayOngoing)
        .collect()
}
