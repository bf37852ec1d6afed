use super::mount;
use crate::{
    libs::{formatter::format_elapsed, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use chrono::Local;

pub async fn cmd() -> Result<()> {
    let (mut clock, _) = mount().await?;
    let elapsed = clock.tick(Local::now());

    if clock.is_punched_in() {
        msg_print!(Message::StatusPunchedIn {
            since: clock.session().check_in.clone().unwrap_or_default(),
            elapsed: format_elapsed(elapsed),
        });
        if let Some(notice) = clock.notice() {
            msg_print!(Message::PunchNotice(notice));
        }
    } else {
        msg_print!(Message::StatusPunchedOut);
    }

    View::session(clock.session())
}
