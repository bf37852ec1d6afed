use crate::libs::punch::PunchNotice;

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigParseError(String),
    ConfigWizardHeader,
    EmployeeIdNotSet,
    ApiUrlNotSet,
    InvalidLateCutoff(String),

    // === PROMPTS ===
    PromptApiUrl,
    PromptEmployeeId,
    PromptLateCutoff,
    PromptRequestTimeout,
    PromptAuthToken,

    // === CREDENTIAL MESSAGES ===
    TokenSaved,
    LoggedOut,
    NotLoggedIn,
    SessionExpired,

    // === PUNCH MESSAGES ===
    PunchedIn { time: String, date: String },
    PunchedOut { time: String, hours: String },
    PunchNotice(PunchNotice),
    PunchInFailed(String),
    PunchOutFailed(String),
    AlreadyPunchedIn(String),
    NotPunchedIn,
    StatusPunchedIn { since: String, elapsed: String },
    StatusPunchedOut,

    // === ATTENDANCE HISTORY ===
    AttendanceLoadFailed(String),
    NoAttendanceRecords,
    NoRowsMatchFilter,
    HistoryHeader(String),
    SummaryHeader(String),

    // === WATCH ===
    WatchStarted,
    WatchElapsed { elapsed: String, since: String },
    WatchStopped,
    WatchNotPunchedIn,

    // === DOCTOR ===
    DoctorChecking(String),
    DoctorReachable { status: u16, elapsed_ms: u128 },
    DoctorUnreachable(String),
    DoctorTipsHeader,
    DoctorTipSameNetwork,
    DoctorTipServerRunning,
    DoctorTipAddress(String),
    DoctorTipFirewall,
}
