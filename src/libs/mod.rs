//! Core library modules for punchclock.
//!
//! The attendance rules (`formatter`, `lateness`, `hours`) are pure
//! functions. `reconcile` and `punch` build on them to turn the server's
//! record list into client state, and `ticker` drives the running timer.
//! The rest is the CLI's infrastructure.
//!
//! ## Usage
//!
//! ```rust
//! use punchclock::libs::hours::hours_worked;
//! use punchclock::libs::lateness::is_late_wire;
//!
//! assert_eq!(hours_worked(Some("09:00:00"), Some("17:30:00")), "8h 30m");
//! assert!(is_late_wire("10:16:00"));
//! ```

pub mod attendance;
pub mod config;
pub mod credentials;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod hours;
pub mod lateness;
pub mod messages;
pub mod punch;
pub mod reconcile;
pub mod report;
pub mod ticker;
pub mod view;
