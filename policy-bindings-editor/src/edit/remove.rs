//! Remove a principal from a role binding.

use crate::error::{EditError, EditResult};
use crate::types::Policy;

/// Remove `principal` from the members of the binding for `role`.
///
/// The input document is never modified; success returns a rebuilt copy with
/// the order of remaining members preserved. Any binding whose member list
/// ends up empty is dropped from the rebuilt document, whether this edit
/// touched it or not, and when no bindings remain the `bindings` key is
/// dropped entirely rather than left as an empty list.
///
/// When the document holds several bindings for the same role (malformed
/// input), every one of them is checked and edited, unlike
/// [`add_member`](crate::add_member), which stops at the first. The asymmetry
/// is deliberate, see DESIGN.md.
///
/// # Errors
///
/// - [`EditError::NoBindings`] when the document has no bindings at all.
/// - [`EditError::NotBound`] when a binding for `role` does not list
///   `principal`.
///
/// On either conflict nothing was changed; the caller's document stands.
pub fn remove_member(policy: &Policy, principal: &str, role: &str) -> EditResult<Policy> {
    let mut updated = policy.clone();
    let bindings = updated.bindings.take().unwrap_or_default();
    if bindings.is_empty() {
        return Err(EditError::NoBindings);
    }

    let mut rebuilt = Vec::with_capacity(bindings.len());
    for mut binding in bindings {
        if binding.role == role {
            if !binding.members.iter().any(|m| m == principal) {
                return Err(EditError::NotBound);
            }
            binding.members.retain(|m| m != principal);
        }
        if !binding.members.is_empty() {
            rebuilt.push(binding);
        }
    }

    updated.bindings = if rebuilt.is_empty() {
        None
    } else {
        Some(rebuilt)
    };
    Ok(updated)
}
