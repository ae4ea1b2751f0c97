//! Schedule model for planned inspection visits

use crate::domain::types::{AssetId, InspectorId, ScheduleId};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// How often a scheduled inspection recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Semiannual => "semiannual",
            Frequency::Annual => "annual",
        }
    }
}

/// A planned inspection visit, owned by the scheduling subsystem.
///
/// The classifier treats this as read-only input. Dates and times are naive on
/// purpose: the console compares against the device's local wall clock with no
/// timezone normalization, and that behavior is preserved here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub asset_id: AssetId,
    pub assigned_user_id: InspectorId,
    pub scheduled_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub frequency: Frequency,
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Lifecycle state of a scheduled visit relative to a reference instant.
///
/// Mutually exclusive; `classify` is a total function of (schedule, now).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScheduleStatus {
    Inactive,
    TodayOngoing,
    TodayNotStarted,
    Overdue,
    Upcoming,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Inactive => "inactive",
            ScheduleStatus::TodayOngoing => "today_ongoing",
            ScheduleStatus::TodayNotStarted => "today_not_started",
            ScheduleStatus::Overdue => "overdue",
            ScheduleStatus::Upcoming => "upcoming",
        }
    }
}

/// Presentation triple for a schedule status (icon, color, label).
///
/// A pure lookup table so every list screen renders a status identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPresentation {
    pub icon: &'static str,
    pub color: &'static str,
    pub label: &'static str,
}

impl ScheduleStatus {
    pub fn presentation(&self) -> StatusPresentation {
        match self {
            ScheduleStatus::Inactive => StatusPresentation {
                icon: "pause-circle",
                color: "gray",
                label: "Nonaktif",
            },
            ScheduleStatus::TodayOngoing => StatusPresentation {
                icon: "play-circle",
                color: "green",
                label: "Sedang Berlangsung",
            },
            ScheduleStatus::TodayNotStarted => StatusPresentation {
                icon: "clock",
                color: "blue",
                label: "Hari Ini",
            },
            ScheduleStatus::Overdue => StatusPresentation {
                icon: "alert-triangle",
                color: "red",
                label: "Terlewat",
            },
            ScheduleStatus::Upcoming => StatusPresentation {
                icon: "calendar",
                color: "yellow",
                label: "Akan Datang",
            },
        }
    }
}
