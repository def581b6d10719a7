//! Printing macros for [`Message`](super::Message) values.
//!
//! In normal mode messages go straight to the terminal with an emoji prefix,
//! errors on stderr. When debug mode is on (`WORKER_DEBUG` or `RUST_LOG` is
//! set) the same text is emitted through `tracing` instead, so it interleaves
//! with the structured log.
//!
//! ```rust
//! use worker::libs::messages::Message;
//! use worker::{msg_error, msg_success};
//!
//! msg_success!(Message::ProjectCreated("Worker".to_string()));
//! msg_error!(Message::ProjectNotClockedIn);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages should be routed through `tracing`.
///
/// Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("WORKER_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $print:ident, $prefix:expr, $msg:expr, $padded:expr) => {{
        let text = format!("{}{}", $prefix, $msg);
        let text = if $padded { format!("\n{}\n", text) } else { text };
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}", text);
        } else {
            $print!("{}", text);
        }
    }};
}

/// Prints a message without a prefix. Pass `true` to surround it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ ", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "ℹ️ ", $msg, true)
    };
}

/// Errors go to stderr in normal mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ ", $msg, false)
    };
}

/// Only printed in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Returns early with the message wrapped in a
/// [`MessageError`](super::MessageError), so `from_error` can show it as is.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        return Err(anyhow::Error::from($crate::libs::messages::MessageError($msg)))
    };
}
