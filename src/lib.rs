//! # Washlog - Laundry Operations Time Compliance
//!
//! A command-line utility for monitoring how actual task durations in
//! laundry departments compare to their configured standard durations.
//!
//! ## Features
//!
//! - **Compliance Reports**: per-department average duration, deviation
//!   percentage, and a normal/warning/critical signal with display colors
//! - **Remaining Time**: how long an in-progress task has before it exceeds
//!   the department standard
//! - **Invoice Numbering**: period-prefixed invoice numbers and return codes
//! - **Privacy Masking**: phone and customer-name masking for shared views
//!
//! ## Usage
//!
//! ```rust,no_run
//! use washlog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
