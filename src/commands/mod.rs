pub mod doctor;
pub mod history;
pub mod init;
pub mod logout;
pub mod punch;
pub mod status;
pub mod summary;
pub mod watch;

use crate::api::HttpAttendanceApi;
use crate::libs::config::Config;
use crate::libs::credentials::Credentials;
use crate::libs::error::AttendanceError;
use crate::libs::messages::Message;
use crate::libs::punch::PunchClock;
use crate::libs::reconcile::Reconciliation;
use crate::{msg_error, msg_error_anyhow};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Punch in, or punch out when already punched in")]
    Punch,
    #[command(about = "Punch in for today")]
    In,
    #[command(about = "Punch out of the open attendance record")]
    Out,
    #[command(about = "Show the current punch state")]
    Status,
    #[command(about = "Show the attendance history")]
    History(history::HistoryArgs),
    #[command(about = "Show attendance totals")]
    Summary,
    #[command(about = "Show the running timer until interrupted")]
    Watch,
    #[command(about = "Check that the attendance server is reachable")]
    Doctor,
    #[command(about = "Remove the stored auth token")]
    Logout,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Punch => punch::toggle().await,
            Commands::In => punch::punch_in().await,
            Commands::Out => punch::punch_out().await,
            Commands::Status => status::cmd().await,
            Commands::History(args) => history::cmd(args).await,
            Commands::Summary => summary::cmd().await,
            Commands::Watch => watch::cmd().await,
            Commands::Doctor => doctor::cmd().await,
            Commands::Logout => logout::cmd(),
        }
    }
}

/// Builds a punch clock from the configuration and restores today's open punch.
///
/// A record list the client cannot read is reported and treated as empty,
/// so the user can still punch in.
pub(crate) async fn mount() -> Result<(PunchClock<HttpAttendanceApi>, Reconciliation)> {
    let config = Config::read()?.with_env();
    let attendance = config.attendance()?;
    let api = HttpAttendanceApi::new(&attendance, config.request_timeout())?.with_credentials(Credentials::new()?);
    let mut clock = PunchClock::new(api, &attendance, config.lateness()?);

    let reconciliation = match clock.mount().await {
        Ok(reconciliation) => reconciliation,
        Err(AttendanceError::InvalidShape(detail)) => {
            msg_error!(Message::AttendanceLoadFailed(detail));
            Reconciliation::default()
        }
        Err(e) => return Err(failure(e, Message::AttendanceLoadFailed)),
    };

    Ok((clock, reconciliation))
}

/// Converts a failed attendance request into a CLI error.
pub(crate) fn failure(e: AttendanceError, message: fn(String) -> Message) -> anyhow::Error {
    if e.is_session_expired() {
        msg_error_anyhow!(Message::SessionExpired)
    } else {
        msg_error_anyhow!(message(e.to_string()))
    }
}
