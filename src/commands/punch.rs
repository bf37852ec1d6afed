//! Punch commands.
//!
//! `punch` behaves like a single punch button. `in` and `out` refuse
//! instead of toggling when the clock is already in the requested state.

use super::{failure, mount};
use crate::{
    api::AttendanceApi,
    libs::{
        attendance::AttendanceRecord,
        hours::hours_worked,
        messages::Message,
        punch::{PunchClock, PunchOutcome},
    },
    msg_print, msg_success, msg_warning,
};
use anyhow::Result;

pub async fn toggle() -> Result<()> {
    let (mut clock, _) = mount().await?;
    let punched_in = clock.is_punched_in();
    match clock.toggle().await {
        Ok(PunchOutcome::PunchedIn(record)) => report_punch_in(&clock, &record),
        Ok(PunchOutcome::PunchedOut(record)) => report_punch_out(&clock, &record),
        Err(e) if punched_in => Err(failure(e, Message::PunchOutFailed)),
        Err(e) => Err(failure(e, Message::PunchInFailed)),
    }
}

pub async fn punch_in() -> Result<()> {
    let (mut clock, _) = mount().await?;
    if clock.is_punched_in() {
        let since = clock.session().check_in.clone().unwrap_or_default();
        msg_warning!(Message::AlreadyPunchedIn(since));
        return Ok(());
    }

    let record = clock.punch_in().await.map_err(|e| failure(e, Message::PunchInFailed))?;
    report_punch_in(&clock, &record)
}

pub async fn punch_out() -> Result<()> {
    let (mut clock, _) = mount().await?;
    if !clock.is_punched_in() {
        msg_warning!(Message::NotPunchedIn);
        return Ok(());
    }

    let record = clock.punch_out().await.map_err(|e| failure(e, Message::PunchOutFailed))?;
    report_punch_out(&clock, &record)
}

fn report_punch_in<A: AttendanceApi>(clock: &PunchClock<A>, record: &AttendanceRecord) -> Result<()> {
    let session = clock.session();
    msg_success!(Message::PunchedIn {
        time: record.check_in().or(session.check_in.as_deref()).unwrap_or_default().to_string(),
        date: session.date.clone().unwrap_or_else(|| record.date.clone()),
    });
    if let Some(notice) = clock.notice() {
        msg_print!(Message::PunchNotice(notice));
    }
    Ok(())
}

fn report_punch_out<A: AttendanceApi>(clock: &PunchClock<A>, record: &AttendanceRecord) -> Result<()> {
    msg_success!(Message::PunchedOut {
        time: record.check_out().unwrap_or_default().to_string(),
        hours: hours_worked(record.check_in.as_deref(), record.check_out.as_deref()),
    });
    if let Some(notice) = clock.notice() {
        msg_print!(Message::PunchNotice(notice));
    }
    Ok(())
}
