//! User-facing message catalogue.
//!
//! Every line the CLI prints is a [`Message`] variant; the text lives in
//! [`display`] and the output routing in [`macros`].

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

use std::io::{self, Write};
use tracing::warn;

/// Redraws `msg` over the current terminal line, for output that refreshes in place.
///
/// In debug mode each redraw becomes its own `tracing` event instead.
pub fn redraw(msg: Message) {
    if macros::is_debug_mode() {
        tracing::info!("{}", msg);
        return;
    }

    let mut stdout = io::stdout().lock();
    if let Err(e) = write!(stdout, "\r{}", msg).and_then(|_| stdout.flush()) {
        warn!(error = %e, "failed to redraw terminal line");
    }
}
