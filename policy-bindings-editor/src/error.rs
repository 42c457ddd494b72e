//! Error types for policy edits.

use thiserror::Error;

/// Result alias for the edit operations.
pub type EditResult<T> = Result<T, EditError>;

/// Expected conflicts reported by the edit operations.
///
/// Each variant describes a state in which the requested edit cannot apply.
/// Conflicts are reported, never panicked on, and never leave a partially
/// edited document behind: the caller's input stands untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// The binding for the role already lists the principal.
    #[error("principal already bound to role")]
    AlreadyBound,

    /// The binding for the role does not list the principal.
    #[error("principal not bound to role")]
    NotBound,

    /// The document has no bindings at all.
    #[error("no bindings to remove from")]
    NoBindings,
}
