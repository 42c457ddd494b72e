//! Single-principal edits to the role bindings of a policy document.
//!
//! Both operations take the document by reference and return a rebuilt copy,
//! so a reported conflict leaves the caller's value untouched.

mod add;
mod remove;

pub use add::add_member;
pub use remove::remove_member;
