//! In-memory notifier.

use super::{Notice, NoticeKind, Notifier};
use std::sync::Mutex;

/// A notifier that keeps every notice it receives.
///
/// The CLI uses it to print a summary after a command and tests use it to
/// assert on what the user would have seen.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.notices().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a notice of the given kind has been received.
    pub fn contains(&self, kind: NoticeKind) -> bool {
        self.notices().iter().any(|n| n.kind == kind)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        match self.notices.lock() {
            Ok(mut guard) => guard.push(notice.clone()),
            Err(poisoned) => poisoned.into_inner().push(notice.clone()),
        }
    }
}
