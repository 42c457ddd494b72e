//! Policy document model.
//!
//! Only the `bindings` key is interpreted. Every other field, at both the
//! document and the binding level (etag, version, audit configs, binding
//! conditions), is carried through serialization unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// An access-control policy document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Role-to-members bindings. The key is absent from the serialized
    /// document when no bindings remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindings: Option<Vec<Binding>>,

    /// Uninterpreted document fields, passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Policy {
    /// Render the document as JSON indented with four spaces, the layout
    /// operators review and diff.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut out = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(out).expect("serde_json emits valid UTF-8"))
    }
}

/// A single role-to-members binding.
///
/// `role` and `members` are required: a binding missing either is rejected
/// when the document is parsed, before any edit runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    pub role: String,
    pub members: Vec<String>,

    /// Uninterpreted binding fields (e.g. a condition), passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Binding {
    /// Binding holding a single member.
    pub fn new(role: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            members: vec![member.into()],
            extra: Map::new(),
        }
    }
}

/// The kind of identity a principal names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalKind {
    User,
    ServiceAccount,
}

impl PrincipalKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::ServiceAccount => "serviceAccount",
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identity appearing in a binding's member list.
///
/// Members are stored as `<kind>:<email>` strings; `Display` produces that
/// form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    kind: PrincipalKind,
    email: String,
}

impl Principal {
    pub fn new(kind: PrincipalKind, email: impl Into<String>) -> Self {
        Self {
            kind,
            email: email.into(),
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.email)
    }
}
