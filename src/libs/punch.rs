//! Punch-in/punch-out state machine.
//!
//! A [`PunchClock`] moves between two states:
//!
//! ```text
//!            punch_in (create record)
//!   PunchedOut ───────────────────────▶ PunchedIn
//!       ▲                                   │
//!       └───────────────────────────────────┘
//!            punch_out (update record)
//! ```
//!
//! Transitions happen only after the server confirms the request. A failed
//! call leaves the clock exactly as it was and hands the error back to the
//! caller. Punch operations borrow the clock mutably, so two requests can
//! never be in flight for the same session.
//!
//! The elapsed-time counter is advanced by [`PunchClock::tick`], driven from
//! outside (see [`crate::libs::ticker`]); ticking never changes the state.

use crate::api::AttendanceApi;
use crate::libs::attendance::{AttendanceConfig, AttendanceRecord, NewAttendance, WireId, SENTINEL_TIME};
use crate::libs::error::{AttendanceError, AttendanceResult};
use crate::libs::formatter::{date_to_wire, elapsed_seconds, parse_time_wire, time_of_day_to_wire};
use crate::libs::lateness::{remark_for, LatenessPolicy};
use crate::libs::reconcile::{reconcile, unwrap_list, OpenSession, Reconciliation};
use chrono::{DateTime, Duration, Local, TimeZone};
use std::fmt::{self, Display, Formatter};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchState {
    PunchedOut,
    PunchedIn,
}

impl Display for PunchState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PunchState::PunchedOut => f.write_str("punched out"),
            PunchState::PunchedIn => f.write_str("punched in"),
        }
    }
}

/// Short status line shown after a punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchNotice {
    LateToday,
    ProductiveDay,
    NiceDay,
}

impl Display for PunchNotice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PunchNotice::LateToday => f.write_str("You are late today!"),
            PunchNotice::ProductiveDay => f.write_str("Have a productive day!"),
            PunchNotice::NiceDay => f.write_str("Thanks! Have a nice day!"),
        }
    }
}

/// Client-side view of the current punch. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PunchSession {
    pub is_punched_in: bool,
    pub punch_in_time: Option<DateTime<Local>>,
    pub attendance_record_id: Option<WireId>,
    pub elapsed_seconds: i64,
    /// Wire date and check-in of the open record, replayed on punch-out.
    pub date: Option<String>,
    pub check_in: Option<String>,
    pub late: bool,
}

impl PunchSession {
    pub fn state(&self) -> PunchState {
        if self.is_punched_in {
            PunchState::PunchedIn
        } else {
            PunchState::PunchedOut
        }
    }

    /// Recomputes `elapsed_seconds`; a no-op while punched out.
    pub fn tick(&mut self, now: DateTime<Local>) -> i64 {
        if let (true, Some(since)) = (self.is_punched_in, self.punch_in_time) {
            self.elapsed_seconds = elapsed_seconds(&since, &now);
        }
        self.elapsed_seconds
    }
}

/// Result of [`PunchClock::toggle`].
#[derive(Debug, Clone, PartialEq)]
pub enum PunchOutcome {
    PunchedIn(AttendanceRecord),
    PunchedOut(AttendanceRecord),
}

pub struct PunchClock<A: AttendanceApi> {
    api: A,
    employee_id: WireId,
    policy: LatenessPolicy,
    session: PunchSession,
    notice: Option<PunchNotice>,
}

impl<A: AttendanceApi> PunchClock<A> {
    pub fn new(api: A, config: &AttendanceConfig, policy: LatenessPolicy) -> Self {
        Self {
            api,
            employee_id: config.employee_id.clone(),
            policy,
            session: PunchSession::default(),
            notice: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn employee_id(&self) -> &WireId {
        &self.employee_id
    }

    pub fn policy(&self) -> LatenessPolicy {
        self.policy
    }

    pub fn state(&self) -> PunchState {
        self.session.state()
    }

    pub fn is_punched_in(&self) -> bool {
        self.session.is_punched_in
    }

    pub fn session(&self) -> &PunchSession {
        &self.session
    }

    pub fn notice(&self) -> Option<PunchNotice> {
        self.notice
    }

    pub fn tick(&mut self, now: DateTime<Local>) -> i64 {
        self.session.tick(now)
    }

    /// Fetches the record list, reconciles it and adopts any open session.
    ///
    /// This is the start-up step that restores a punch made in an earlier run.
    pub async fn mount(&mut self) -> AttendanceResult<Reconciliation> {
        self.mount_at(Local::now()).await
    }

    pub async fn mount_at(&mut self, now: DateTime<Local>) -> AttendanceResult<Reconciliation> {
        let payload = self.api.list().await.map_err(|e| self.observe_failure("load attendance", e))?;
        let reconciliation = reconcile(&unwrap_list(payload), &self.employee_id, &date_to_wire(&now))?;

        debug!(rows = reconciliation.rows.len(), open = reconciliation.open_session.is_some(), "attendance reconciled");
        match &reconciliation.open_session {
            Some(open) => self.hydrate(open, now),
            None => self.session = PunchSession::default(),
        }

        Ok(reconciliation)
    }

    /// Enters `PunchedIn` from a record that is still open on the server.
    ///
    /// The punch-in time is rebuilt from the local date and the record's check-in,
    /// on the previous day when that instant would lie after `now`.
    pub fn hydrate(&mut self, open: &OpenSession, now: DateTime<Local>) {
        let punch_in_time = open
            .check_in
            .as_deref()
            .and_then(parse_time_wire)
            .and_then(|time| Local.from_local_datetime(&now.date_naive().and_time(time)).earliest())
            .map(|since| if since > now { since - Duration::days(1) } else { since })
            .unwrap_or(now);
        let late = open.check_in.as_deref().is_some_and(|time| self.policy.is_late_wire(time));

        self.session = PunchSession {
            is_punched_in: true,
            punch_in_time: Some(punch_in_time),
            attendance_record_id: Some(open.record_id.clone()),
            elapsed_seconds: 0,
            date: Some(open.date.clone()),
            check_in: open.check_in.clone(),
            late,
        };
        self.session.tick(now);
        self.notice = Some(if late { PunchNotice::LateToday } else { PunchNotice::ProductiveDay });
        info!(record_id = %open.record_id, "restored open punch");
    }

    pub async fn punch_in(&mut self) -> AttendanceResult<AttendanceRecord> {
        self.punch_in_at(Local::now()).await
    }

    /// Creates today's attendance record and enters `PunchedIn`.
    pub async fn punch_in_at(&mut self, now: DateTime<Local>) -> AttendanceResult<AttendanceRecord> {
        if self.session.is_punched_in {
            return Err(AttendanceError::InvalidTransition {
                action: "punch in",
                state: PunchState::PunchedIn,
            });
        }

        let late = self.policy.is_late(now.naive_local().time());
        let request = NewAttendance {
            employee_id: self.employee_id.clone(),
            date: date_to_wire(&now),
            check_in: time_of_day_to_wire(&now),
            check_out: SENTINEL_TIME.to_string(),
            status: true,
            remark: remark_for(late).to_string(),
        };

        let record = self.api.create(&request).await.map_err(|e| self.observe_failure("punch in", e))?;

        self.session = PunchSession {
            is_punched_in: true,
            punch_in_time: Some(now),
            attendance_record_id: Some(record.id.clone()),
            elapsed_seconds: 0,
            date: Some(request.date),
            check_in: Some(request.check_in),
            late,
        };
        self.notice = Some(if late { PunchNotice::LateToday } else { PunchNotice::ProductiveDay });
        info!(record_id = %record.id, late, "punched in");

        Ok(record)
    }

    pub async fn punch_out(&mut self) -> AttendanceResult<AttendanceRecord> {
        self.punch_out_at(Local::now()).await
    }

    /// Completes the tracked record with a check-out and enters `PunchedOut`.
    pub async fn punch_out_at(&mut self, now: DateTime<Local>) -> AttendanceResult<AttendanceRecord> {
        let Some(record_id) = self.session.attendance_record_id.clone() else {
            error!(state = %self.state(), "punch out requested without a tracked attendance record");
            return Err(AttendanceError::MissingRecord);
        };
        if !self.session.is_punched_in {
            return Err(AttendanceError::InvalidTransition {
                action: "punch out",
                state: PunchState::PunchedOut,
            });
        }

        let request = NewAttendance {
            employee_id: self.employee_id.clone(),
            date: self.session.date.clone().unwrap_or_else(|| date_to_wire(&now)),
            check_in: self.session.check_in.clone().unwrap_or_else(|| SENTINEL_TIME.to_string()),
            check_out: time_of_day_to_wire(&now),
            status: true,
            remark: remark_for(self.session.late).to_string(),
        };

        let record = self
            .api
            .update(&record_id, &request)
            .await
            .map_err(|e| self.observe_failure("punch out", e))?;

        self.session = PunchSession::default();
        self.notice = Some(PunchNotice::NiceDay);
        info!(record_id = %record_id, "punched out");

        Ok(record)
    }

    pub async fn toggle(&mut self) -> AttendanceResult<PunchOutcome> {
        self.toggle_at(Local::now()).await
    }

    /// Punches out when punched in, in otherwise, like the single punch button.
    pub async fn toggle_at(&mut self, now: DateTime<Local>) -> AttendanceResult<PunchOutcome> {
        match self.state() {
            PunchState::PunchedOut => self.punch_in_at(now).await.map(PunchOutcome::PunchedIn),
            PunchState::PunchedIn => self.punch_out_at(now).await.map(PunchOutcome::PunchedOut),
        }
    }

    fn observe_failure(&self, action: &str, e: AttendanceError) -> AttendanceError {
        if e.is_session_expired() {
            warn!(action, "session expired");
            self.api.session_expired();
        } else {
            warn!(action, error = %e, "attendance request failed");
        }
        e
    }
}
