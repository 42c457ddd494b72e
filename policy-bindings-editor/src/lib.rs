//! This crate provides the core logic for the policy bindings tool:
//! - Policy document model with passthrough of uninterpreted fields
//! - Add/remove of a single principal in a role-to-members binding
//! - Pretty JSON rendering for operator review
//!

mod edit;
mod error;
mod types;

// Re-exports for a small, focused public API
pub use edit::{add_member, remove_member};
pub use error::{EditError, EditResult};
pub use types::{Binding, Policy, Principal, PrincipalKind};
