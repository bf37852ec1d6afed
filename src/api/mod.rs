//! Remote attendance service.
//!
//! The punch state machine talks to the service only through the
//! [`AttendanceApi`] trait, so the HTTP client can be replaced by an
//! in-memory double in tests.
//!
//! ## Endpoints
//!
//! - `GET /attendances`: every attendance record the caller may see
//! - `POST /attendances`: create a record, the response carries its `id`
//! - `PUT /attendances/{id}`: replace a record
//! - `GET /health`: connectivity probe used by `punchclock doctor`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchclock::api::{AttendanceApi, HttpAttendanceApi};
//! use punchclock::libs::attendance::AttendanceConfig;
//! use std::time::Duration;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = AttendanceConfig::new("http://localhost:8080/api", "1");
//! let api = HttpAttendanceApi::new(&config, Duration::from_secs(5))?;
//! let payload = api.list().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::attendance::{AttendanceRecord, NewAttendance, WireId};
use crate::libs::error::AttendanceResult;
use serde_json::Value;

pub mod http;

pub use http::{HealthReport, HttpAttendanceApi};

/// Operations the attendance helper needs from the remote service.
#[allow(async_fn_in_trait)]
pub trait AttendanceApi {
    /// Fetches all attendance records.
    ///
    /// The raw payload is returned untouched; unwrapping `{data: [...]}`
    /// envelopes and validating the shape happen during reconciliation.
    async fn list(&self) -> AttendanceResult<Value>;

    /// Creates a record and returns it as stored by the server.
    async fn create(&self, request: &NewAttendance) -> AttendanceResult<AttendanceRecord>;

    /// Replaces record `id` and returns it as stored by the server.
    async fn update(&self, id: &WireId, request: &NewAttendance) -> AttendanceResult<AttendanceRecord>;

    /// Called after a 401 so cached credentials can be dropped.
    fn session_expired(&self) {}
}
