//! Error types for the label registry.

use core::fmt;

use crate::label::LabelId;

/// A failure reported by [`LabelRegistry`](crate::LabelRegistry).
///
/// Every variant is a local, structured failure returned to the immediate
/// caller, never process-fatal by design, though a caller may choose to
/// treat it as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelError {
    /// The label's identity has no recorded name.
    ///
    /// Anonymous labels carry no text; check
    /// [`is_named`](crate::LabelRegistry::is_named) before asking for it.
    TextUnavailable {
        /// The anonymous identity.
        id: LabelId,
    },

    /// Parsing a label back from its textual form is not provided.
    ///
    /// A label's identity is only meaningful relative to the registry that
    /// allocated it; no parsing format is defined.
    ReadUnsupported,

    /// The output sink refused the label text during
    /// [`write_text`](crate::LabelRegistry::write_text).
    SinkFailed,
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::TextUnavailable { id } => {
                write!(f, "label #{} has no name (anonymous label)", id.as_u64())
            }
            LabelError::ReadUnsupported => {
                write!(f, "reading a label from text is not supported")
            }
            LabelError::SinkFailed => {
                write!(f, "failed to write label text to sink")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LabelError {}
