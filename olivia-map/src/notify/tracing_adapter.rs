//! Tracing library adapter implementation.

use super::{Notice, Notifier};

/// Notifier that writes every notice to the `tracing` subscriber.
///
/// Notices are logged at warn level with the notice kind as a structured
/// field, so they show up on the console and in the session log file.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        tracing::warn!(kind = ?notice.kind, "{}", notice.message);
    }
}
