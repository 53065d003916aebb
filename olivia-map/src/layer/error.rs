//! Base layer resolution errors.

use crate::notify::{Notice, NoticeKind};
use thiserror::Error;

/// Why a base layer config produced no descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The custom layer was selected but no URL template was given
    #[error("Missing custom url template.")]
    MissingCustomUrl,

    /// The id is neither a built-in layer nor the custom layer
    #[error("Invalid base layer id: '{id}'.")]
    UnknownLayerId { id: String },
}

impl ResolutionError {
    /// The notice shown to the user for this error.
    pub fn notice(&self) -> Notice {
        let kind = match self {
            Self::MissingCustomUrl => NoticeKind::MissingCustomUrl,
            Self::UnknownLayerId { .. } => NoticeKind::UnknownLayerId,
        };
        Notice::new(kind, self.to_string())
    }
}
