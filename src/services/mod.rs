//! Services - admission-control decision logic
//!
//! This module contains the core decision services:
//! - `geo` - great-circle distance and bearing math
//! - `geofence` - radius check for static assets
//! - `schedule_status` - schedule lifecycle classification
//! - `submission_guard` - admit/deny decision and in-flight latch
//! - `bulk` - partial-failure aggregation for bulk operations
//! - `location` - position acquisition policy and cache
//! - `capture` - countdown-then-capture state machine

pub mod bulk;
pub mod capture;
pub mod geo;
pub mod geofence;
pub mod location;
pub mod schedule_status;
pub mod submission_guard;

// Re-export commonly used types
pub use capture::{CaptureState, CountdownCapture};
pub use geofence::GeofenceValidator;
pub use location::{LocationPolicy, LocationTracker, PositionSource};
pub use submission_guard::{SubmissionGuard, SubmissionLatch};
