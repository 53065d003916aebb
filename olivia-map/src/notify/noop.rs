//! No-operation notifier implementation.

use super::{Notice, Notifier};

/// A notifier that discards every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    #[inline]
    fn notify(&self, _notice: &Notice) {}
}
