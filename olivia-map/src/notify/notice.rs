//! Notice type and notifier trait.

use serde::Serialize;
use std::fmt;

/// The condition that triggered a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// A dimension or measure carries an error from the data layer
    CubeFieldError,
    /// The custom base layer was selected without a URL template
    MissingCustomUrl,
    /// The configured base layer id is neither built-in nor custom
    UnknownLayerId,
    /// The host supplied a start position that is not a number
    InvalidPosition,
}

/// A single user-visible message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Sink for user-visible notices.
///
/// Delivery is synchronous: when `notify` returns the notice has been shown
/// (or recorded). Implementations must be `Send + Sync` so one notifier can be
/// shared by concurrent render passes.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}
