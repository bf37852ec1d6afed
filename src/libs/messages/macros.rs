//! Output macros for [`Message`](super::Message).
//!
//! In debug mode every message goes through `tracing`, so it lands in the
//! same stream as the structured logs. Otherwise messages are printed
//! plainly, errors to stderr.
//!
//! Debug mode is on when `PUNCHCLOCK_DEBUG` or `RUST_LOG` is set.
//!
//! ```rust
//! use punchclock::{msg_error, msg_success};
//! use punchclock::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_error!(Message::NotPunchedIn);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages are routed to `tracing`. Evaluated once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("PUNCHCLOCK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Sends one formatted message to `tracing` at `$level` in debug mode, or to
/// `$print` otherwise. Shared body of the output macros below.
#[doc(hidden)]
#[macro_export]
macro_rules! msg_emit {
    ($level:ident, $print:ident, $fmt:literal, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!($fmt, $msg);
        } else {
            $print!($fmt, $msg);
        }
    };
}

/// Prints a message without prefix; `msg_print!(msg, true)` pads it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::msg_emit!(info, println, "{}", $msg)
    };
    ($msg:expr, true) => {
        $crate::msg_emit!(info, println, "\n{}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::msg_emit!(info, println, "✅ {}", $msg)
    };
}

/// Errors go to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::msg_emit!(error, eprintln, "❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::msg_emit!(warn, println, "⚠️ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::msg_emit!(info, println, "ℹ️ {}", $msg)
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
