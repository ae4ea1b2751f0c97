//! Domain models - core business types for inspection admission
//!
//! This module contains the canonical data types used throughout the engine:
//! - `Coordinate` / `GeofenceConfig` / `GeoCheckResult` - location gating types
//! - `Schedule` / `ScheduleStatus` - planned visit model and lifecycle states
//! - `EvidenceSet` / `SubmissionDecision` - admission inputs and outcome
//! - `BulkOperationResult` - partial-failure aggregate for bulk flows
//! - error taxonomy for location acquisition and submission dispatch

pub mod error;
pub mod schedule;
pub mod types;

// Re-export commonly used types at module level
pub use error::{LocationError, SubmitError};
pub use schedule::{Frequency, Schedule, ScheduleStatus, StatusPresentation};
pub use types::{
    AssetId, AssetKind, BulkOperationResult, Coordinate, DamageRecord, DenialReason,
    EvidenceRequirements, EvidenceSet, GeoCheckResult, GeofenceConfig, InspectorId,
    LocationReading, ScheduleId, SubmissionDecision,
};
