//! Device position acquisition with staleness policy
//!
//! The engine never talks to positioning hardware itself; a `PositionSource`
//! implementation wraps the platform API. This module enforces the
//! acquisition policy: high-accuracy preference, a hard acquisition timeout,
//! and a maximum cached-reading age. A reading older than the tolerance is
//! never reused; it triggers a fresh acquisition instead of a false pass/fail
//! against the geofence.

use crate::domain::error::LocationError;
use crate::domain::types::LocationReading;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Acquisition policy for position readings
#[derive(Debug, Clone, Copy)]
pub struct LocationPolicy {
    /// Prefer the high-accuracy positioning mode
    pub high_accuracy: bool,
    /// Give up on an acquisition after this long
    pub timeout: Duration,
    /// A cached reading older than this must not be reused
    pub max_reading_age: Duration,
}

impl Default for LocationPolicy {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            max_reading_age: Duration::from_secs(60),
        }
    }
}

/// Platform positioning API, abstracted for testing and portability
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Acquire one reading. Implementations map native error codes into
    /// `LocationError::Unavailable`.
    async fn acquire(&self, high_accuracy: bool) -> Result<LocationReading, LocationError>;
}

/// Holds the most recent reading and applies the acquisition policy.
///
/// Shared between call sites (the geofence panel and the submission flow both
/// ask for the current position), so the cache sits behind a mutex.
pub struct LocationTracker {
    source: Arc<dyn PositionSource>,
    policy: LocationPolicy,
    last: Mutex<Option<LocationReading>>,
}

impl LocationTracker {
    pub fn new(source: Arc<dyn PositionSource>, policy: LocationPolicy) -> Self {
        Self { source, policy, last: Mutex::new(None) }
    }

    /// Current position under the policy: reuse the cached reading while it is
    /// fresh, otherwise acquire a new one within the timeout.
    pub async fn current(&self) -> Result<LocationReading, LocationError> {
        let now = Instant::now();

        if let Some(cached) = *self.last.lock() {
            let age = cached.age(now);
            if age <= self.policy.max_reading_age {
                debug!(age_s = %age.as_secs(), "location_cache_hit");
                return Ok(cached);
            }
            info!(
                age_s = %age.as_secs(),
                max_age_s = %self.policy.max_reading_age.as_secs(),
                "location_cache_stale_reacquiring"
            );
        }

        self.acquire_fresh().await
    }

    /// Force a fresh acquisition, bypassing the cache
    pub async fn acquire_fresh(&self) -> Result<LocationReading, LocationError> {
        let acquired = tokio::time::timeout(
            self.policy.timeout,
            self.source.acquire(self.policy.high_accuracy),
        )
        .await;

        match acquired {
            Ok(Ok(reading)) => {
                // A source may deliver a reading it captured long ago (late
                // arrival); it is subject to the same staleness tolerance
                self.check_freshness(&reading, Instant::now())?;
                *self.last.lock() = Some(reading);
                debug!("location_acquired");
                Ok(reading)
            }
            Ok(Err(e)) => {
                warn!(error = %e, "location_acquisition_failed");
                Err(e)
            }
            Err(_) => {
                warn!(timeout_s = %self.policy.timeout.as_secs(), "location_acquisition_timeout");
                Err(LocationError::Unavailable(format!(
                    "acquisition timed out after {}s",
                    self.policy.timeout.as_secs()
                )))
            }
        }
    }

    fn check_freshness(&self, reading: &LocationReading, now: Instant) -> Result<(), LocationError> {
        let age = reading.age(now);
        if age > self.policy.max_reading_age {
            return Err(LocationError::Stale {
                age_secs: age.as_secs() as i64,
                max_age_secs: self.policy.max_reading_age.as_secs() as i64,
            });
        }
        Ok(())
    }

    /// Last reading, if any, regardless of age (for display only)
    pub fn last_reading(&self) -> Option<LocationReading> {
        *self.last.lock()
    }
}
