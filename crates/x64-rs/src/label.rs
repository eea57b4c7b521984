//! Symbolic labels and the registry that interns their names.
//!
//! A [`Label`] is a symbolic reference to a code location that has not been
//! laid out yet: just a dense integer identity, cheap to copy and compare,
//! usable as a key in the encoder's fix-up tables.  The [`LabelRegistry`]
//! owns the authoritative name↔identity mapping and allocates identities
//! monotonically for its own lifetime.

use alloc::string::String;
use core::fmt;

use bimap::BiBTreeMap;

use crate::error::LabelError;

/// The dense identity a [`Label`] carries.
///
/// A newtype rather than a bare integer, so label identities cannot be
/// accidentally mixed with offsets or addresses.  Ordering and hashing go
/// through the underlying integer, making identities usable as map/set keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelId(u64);

impl LabelId {
    /// The raw identity value, for fix-up tables keyed by integer.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<LabelId> for u64 {
    #[inline]
    fn from(id: LabelId) -> u64 {
        id.0
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A symbolic reference to an as-yet-unresolved code location.
///
/// Plain value data: copying a label never touches the registry, and many
/// copies may share one identity.  Equality, ordering, and hashing are
/// purely by identity, so labels work directly as fix-up table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    id: LabelId,
}

impl Label {
    /// This label's identity.
    #[must_use]
    pub const fn id(self) -> LabelId {
        self.id
    }
}

impl From<Label> for u64 {
    #[inline]
    fn from(label: Label) -> u64 {
        label.id.0
    }
}

/// Allocates label identities and interns label names.
///
/// An explicitly owned object rather than a process-global table: each
/// assembler run creates its own registry, which makes lifetime and test
/// isolation explicit.  All mutation goes through `&mut self`, so the
/// borrow checker rules out the lookup/insert race in single-ownership use;
/// a registry shared across threads needs exactly one guard,
/// `std::sync::Mutex<LabelRegistry>`, around the whole object.
///
/// Identities are allocated monotonically and never reclaimed or reused.
/// Dropping [`Label`] values has no effect on the registry.
#[derive(Debug, Clone, Default)]
pub struct LabelRegistry {
    /// Bidirectional name↔identity table for named labels.
    names: BiBTreeMap<String, LabelId>,
    /// The next previously unused identity.
    next: u64,
}

impl LabelRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identities allocated so far (named and anonymous).
    #[must_use]
    pub fn len(&self) -> usize {
        self.next as usize
    }

    /// True if no identity has been allocated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next == 0
    }

    fn alloc(&mut self) -> LabelId {
        let id = LabelId(self.next);
        self.next += 1;
        id
    }

    /// Creates a new anonymous label with a unique identity.
    ///
    /// The name table is untouched: [`is_named`](Self::is_named) reports
    /// `false` for the result and [`text`](Self::text) fails.  Every call
    /// yields a distinct identity.
    pub fn fresh(&mut self) -> Label {
        Label { id: self.alloc() }
    }

    /// Creates a named label, interning `name` on first use.
    ///
    /// Repeated calls with the same name yield the same identity and do not
    /// allocate.  An identity keeps the first name it was given.
    pub fn named(&mut self, name: &str) -> Label {
        if let Some(&id) = self.names.get_by_left(name) {
            return Label { id };
        }
        let id = self.alloc();
        self.names.insert(String::from(name), id);
        Label { id }
    }

    /// True if this label's identity has a recorded name — that is, it was
    /// produced by [`named`](Self::named), possibly by another caller before
    /// this `Label` value was copied around.
    #[must_use]
    pub fn is_named(&self, label: Label) -> bool {
        self.names.contains_right(&label.id)
    }

    /// The recorded name of a named label.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::TextUnavailable`] if the identity is anonymous.
    /// Callers that cannot tolerate the error path check
    /// [`is_named`](Self::is_named) first.
    pub fn text(&self, label: Label) -> Result<&str, LabelError> {
        self.names
            .get_by_right(&label.id)
            .map(String::as_str)
            .ok_or(LabelError::TextUnavailable { id: label.id })
    }

    /// Writes the recorded name of a named label to `sink`.
    ///
    /// # Errors
    ///
    /// [`LabelError::TextUnavailable`] for anonymous labels;
    /// [`LabelError::SinkFailed`] if the sink refuses the text.
    pub fn write_text<W: fmt::Write>(&self, label: Label, sink: &mut W) -> Result<(), LabelError> {
        let name = self.text(label)?;
        sink.write_str(name).map_err(|_| LabelError::SinkFailed)
    }

    /// Reading a label back from its textual form.
    ///
    /// Not provided: a label's identity is only meaningful relative to the
    /// registry that allocated it, and no parsing format is defined.  Labels
    /// round-trip from construction (`named` → `text`), never from their own
    /// serialized form.
    ///
    /// # Errors
    ///
    /// Always returns [`LabelError::ReadUnsupported`].
    pub fn read_text(&self, _source: &str) -> Result<Label, LabelError> {
        Err(LabelError::ReadUnsupported)
    }
}
