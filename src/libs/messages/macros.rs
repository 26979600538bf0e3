//! Message display macros with console/tracing routing.
//!
//! Every macro routes through the same rule: when debug mode is active the
//! message goes to the `tracing` subscriber as a structured event, otherwise
//! it is printed directly to the console. Debug mode is detected once from
//! the environment (`WASHLOG_DEBUG` or `RUST_LOG`) and cached.
//!
//! ## Macro Categories
//!
//! - `msg_print!` — general output
//! - `msg_success!` — ✅ confirmations
//! - `msg_warning!` — ⚠️ warnings
//! - `msg_error!` — ❌ errors (stderr in console mode)
//! - `msg_bail_anyhow!` — return early with an `anyhow::Error` built from a
//!   [`Message`](super::Message)

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether message output should be routed through `tracing`.
///
/// Checked from the environment on first call and cached for the lifetime
/// of the process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        std::env::var("WASHLOG_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a general message, with an optional surrounding blank line.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints a warning message with a ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️  {}", $msg);
        } else {
            println!("⚠️  {}", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix. Console mode writes to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Returns early from the enclosing function with a message error.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
