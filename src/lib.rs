//! # Punchclock - attendance tracking from the terminal
//!
//! A client for an HTTP attendance service: punch in and out, watch the
//! running timer and browse the attendance history.
//!
//! ## Features
//!
//! - **Punching**: One record per workday, created on punch-in and completed on punch-out
//! - **Session Recovery**: An open record from an earlier run is picked up on start
//! - **Lateness**: Punch-ins after the configured cutoff are remarked as late
//! - **History**: Filterable, sortable attendance table with totals
//! - **Diagnostics**: Health probe of the configured server
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchclock::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
