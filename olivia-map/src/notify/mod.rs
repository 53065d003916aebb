//! User-facing notification channel.
//!
//! The map component reports a handful of conditions to the user rather than
//! failing: field errors carried by a result cube, a custom base layer without
//! a URL template, an unknown base layer id and a start position that is not
//! numeric. Components accept a
//! `&dyn Notifier` and never decide how the notice is shown.
//!
//! # Implementations
//!
//! - `TracingNotifier`: writes notices to the `tracing` subscriber at warn level
//! - `NoOpNotifier`: discards notices
//! - `RecordingNotifier`: keeps notices in memory for later inspection
//!
//! ```
//! use olivia_map::notify::{Notice, NoticeKind, Notifier, RecordingNotifier};
//!
//! let notifier = RecordingNotifier::new();
//! notifier.notify(&Notice::new(NoticeKind::UnknownLayerId, "Invalid base layer id."));
//! assert_eq!(notifier.len(), 1);
//! ```

mod noop;
mod notice;
mod recording;
mod tracing_adapter;

pub use noop::NoOpNotifier;
pub use notice::{Notice, NoticeKind, Notifier};
pub use recording::RecordingNotifier;
pub use tracing_adapter::TracingNotifier;
