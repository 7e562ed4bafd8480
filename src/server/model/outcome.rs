//! Results of toggling a relation such as a like, friendship or membership.

/// Result of adding a relation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The relation was inserted.
    Created,
    /// The relation was already present; nothing changed.
    AlreadyExists,
    /// One of the related rows does not exist; nothing changed.
    NotFound,
}

/// Result of removing a relation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The relation was deleted.
    Removed,
    /// The relation was not present; nothing changed.
    Absent,
    /// One of the related rows does not exist; nothing changed.
    NotFound,
}
