//! Connectivity check against the configured attendance server.

use crate::{
    api::HttpAttendanceApi,
    libs::{attendance::AttendanceConfig, config::Config, messages::Message, view::View},
    msg_error, msg_print, msg_success,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?.with_env();
    let attendance = AttendanceConfig::new(config.api_url.clone(), config.employee_id.clone().unwrap_or_default());
    let api = HttpAttendanceApi::new(&attendance, config.request_timeout())?;

    msg_print!(Message::DoctorChecking(api.base_url().to_string()));
    let report = api.health().await;
    View::health(&report)?;

    match report.status.filter(|_| report.success) {
        Some(status) => msg_success!(Message::DoctorReachable {
            status,
            elapsed_ms: report.elapsed_ms,
        }),
        None => {
            msg_error!(Message::DoctorUnreachable(report.error.clone().unwrap_or_default()));
            msg_print!(Message::DoctorTipsHeader, true);
            msg_print!(Message::DoctorTipSameNetwork);
            msg_print!(Message::DoctorTipServerRunning);
            msg_print!(Message::DoctorTipAddress(api.base_url().to_string()));
            msg_print!(Message::DoctorTipFirewall);
        }
    }

    Ok(())
}
