//! Live elapsed-time display for the open punch.

use super::mount;
use crate::{
    libs::{
        formatter::format_elapsed,
        messages::{self, Message},
        ticker::{Ticker, TICK_PERIOD},
    },
    msg_info, msg_print,
};
use anyhow::Result;
use parking_lot::Mutex;
use std::sync::Arc;

pub async fn cmd() -> Result<()> {
    let (clock, _) = mount().await?;
    if !clock.is_punched_in() {
        msg_info!(Message::WatchNotPunchedIn);
        return Ok(());
    }

    let since = clock.session().check_in.clone().unwrap_or_default();
    let session = Arc::new(Mutex::new(clock.session().clone()));
    msg_print!(Message::WatchStarted);

    let ticking = Arc::clone(&session);
    let ticker = Ticker::start(TICK_PERIOD, move |now| {
        let elapsed = ticking.lock().tick(now);
        messages::redraw(Message::WatchElapsed {
            elapsed: format_elapsed(elapsed),
            since: since.clone(),
        });
    });

    tokio::signal::ctrl_c().await?;
    ticker.stop();

    if !messages::macros::is_debug_mode() {
        println!();
    }
    msg_print!(Message::WatchStopped);
    Ok(())
}
