//! Text of every [`Message`].

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "No configuration to delete".to_string(),
            Message::ConfigParseError(error) => format!("Failed to parse configuration file: {}", error),
            Message::ConfigWizardHeader => "Configure punchclock".to_string(),
            Message::EmployeeIdNotSet => "Employee id is not configured. Run `punchclock init` first.".to_string(),
            Message::ApiUrlNotSet => "API URL is not configured. Run `punchclock init` first.".to_string(),
            Message::InvalidLateCutoff(value) => format!("Invalid late cutoff '{}', expected HH:MM", value),

            // === PROMPTS ===
            Message::PromptApiUrl => "Attendance API URL".to_string(),
            Message::PromptEmployeeId => "Employee id".to_string(),
            Message::PromptLateCutoff => "Late after (HH:MM)".to_string(),
            Message::PromptRequestTimeout => "Request timeout (ms)".to_string(),
            Message::PromptAuthToken => "Auth token (leave empty to keep the current one)".to_string(),

            // === CREDENTIAL MESSAGES ===
            Message::TokenSaved => "Auth token saved".to_string(),
            Message::LoggedOut => "Logged out, auth token removed".to_string(),
            Message::NotLoggedIn => "No auth token stored".to_string(),
            Message::SessionExpired => "Session expired, please log in again".to_string(),

            // === PUNCH MESSAGES ===
            Message::PunchedIn { time, date } => format!("Punched in at {} on {}", time, date),
            Message::PunchedOut { time, hours } => format!("Punched out at {} ({} worked)", time, hours),
            Message::PunchNotice(notice) => notice.to_string(),
            Message::PunchInFailed(error) => format!("Punch in failed: {}", error),
            Message::PunchOutFailed(error) => format!("Punch out failed: {}", error),
            Message::AlreadyPunchedIn(since) => format!("Already punched in since {}", since),
            Message::NotPunchedIn => "You are not punched in".to_string(),
            Message::StatusPunchedIn { since, elapsed } => format!("Punched in since {}, elapsed {}", since, elapsed),
            Message::StatusPunchedOut => "Punched out".to_string(),

            // === ATTENDANCE HISTORY ===
            Message::AttendanceLoadFailed(error) => format!("Failed to load attendance: {}", error),
            Message::NoAttendanceRecords => "No attendance records found".to_string(),
            Message::NoRowsMatchFilter => "No attendance records match the filter".to_string(),
            Message::HistoryHeader(employee_id) => format!("Attendance history for employee {}", employee_id),
            Message::SummaryHeader(employee_id) => format!("Attendance summary for employee {}", employee_id),

            // === WATCH ===
            Message::WatchStarted => "Watching the running timer, press Ctrl+C to stop".to_string(),
            Message::WatchElapsed { elapsed, since } => format!("⏱  {}  (since {})", elapsed, since),
            Message::WatchStopped => "Stopped watching".to_string(),
            Message::WatchNotPunchedIn => "Not punched in, nothing to watch".to_string(),

            // === DOCTOR ===
            Message::DoctorChecking(url) => format!("Checking {}", url),
            Message::DoctorReachable { status, elapsed_ms } => format!("Server reachable: HTTP {} in {} ms", status, elapsed_ms),
            Message::DoctorUnreachable(error) => format!("Server unreachable: {}", error),
            Message::DoctorTipsHeader => "Troubleshooting:".to_string(),
            Message::DoctorTipSameNetwork => "  1. Make sure this machine is on the same network as the server".to_string(),
            Message::DoctorTipServerRunning => "  2. Check that the attendance server is running".to_string(),
            Message::DoctorTipAddress(url) => format!("  3. Verify the server address: {}", url),
            Message::DoctorTipFirewall => "  4. Check that no firewall blocks the port".to_string(),
        };
        write!(f, "{}", s)
    }
}
