//! Add a principal to a role binding.

use crate::error::{EditError, EditResult};
use crate::types::{Binding, Policy};

/// Add `principal` to the members of the binding for `role`.
///
/// The input document is never modified; success returns a rebuilt copy. A
/// document with no bindings gains a bindings list holding the one new
/// binding. An unknown role gets a fresh binding appended after the existing
/// entries, which keep their order. An existing member list grows at the end.
///
/// When the document holds several bindings for the same role (malformed
/// input), only the first one is inspected and updated; later duplicates pass
/// through unchanged. [`remove_member`](crate::remove_member) instead edits
/// every duplicate. The asymmetry is deliberate, see DESIGN.md.
///
/// # Errors
///
/// [`EditError::AlreadyBound`] when the binding for `role` already lists
/// `principal`. Nothing was changed; the caller's document stands.
pub fn add_member(policy: &Policy, principal: &str, role: &str) -> EditResult<Policy> {
    let mut updated = policy.clone();
    let bindings = updated.bindings.take().unwrap_or_default();
    if bindings.is_empty() {
        updated.bindings = Some(vec![Binding::new(role, principal)]);
        return Ok(updated);
    }

    let mut rebuilt = Vec::with_capacity(bindings.len() + 1);
    let mut matched = false;
    for mut binding in bindings {
        if !matched && binding.role == role {
            matched = true;
            if binding.members.iter().any(|m| m == principal) {
                return Err(EditError::AlreadyBound);
            }
            binding.members.push(principal.to_owned());
        }
        rebuilt.push(binding);
    }
    if !matched {
        rebuilt.push(Binding::new(role, principal));
    }

    updated.bindings = Some(rebuilt);
    Ok(updated)
}
