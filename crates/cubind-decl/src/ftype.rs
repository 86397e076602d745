//! Foreign type representation.
//!
//! A [`ForeignType`] carries the C spelling of a type together with the
//! typedef name it was declared under (if any) and its const qualification.
//! Name-table lookups key on the typedef name when one exists, so opaque
//! handle types like `cudnnHandle_t` resolve by their typedef rather than
//! their underlying `struct cudnnContext*` spelling.

use serde::{Deserialize, Serialize};

/// A foreign C type as seen by the header parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ForeignType {
    /// Full C textual representation (e.g. `"const float*"`).
    pub repr: String,
    /// Typedef name this type was declared under, if any.
    #[serde(default)]
    pub typedef_name: Option<String>,
    /// Whether the outer type is const-qualified.
    #[serde(default)]
    pub is_const: bool,
}

impl ForeignType {
    /// A plain type with no typedef and no const qualifier.
    pub fn new(repr: impl Into<String>) -> Self {
        Self {
            repr: repr.into(),
            typedef_name: None,
            is_const: false,
        }
    }

    /// A type declared under a typedef name.
    pub fn typedef(repr: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            repr: repr.into(),
            typedef_name: Some(name.into()),
            is_const: false,
        }
    }

    /// A const-qualified type; `inner` is the spelling without the qualifier.
    pub fn const_qualified(inner: impl Into<String>) -> Self {
        Self {
            repr: format!("const {}", inner.into()),
            typedef_name: None,
            is_const: true,
        }
    }

    /// The key used for name-table lookups.
    ///
    /// The typedef name wins when present; otherwise a const-qualified type
    /// is keyed by its spelling with the leading `const ` stripped; otherwise
    /// the full spelling is the key.
    pub fn lookup_key(&self) -> &str {
        if let Some(td) = &self.typedef_name {
            return td;
        }
        if self.is_const {
            return self.repr.strip_prefix("const ").unwrap_or(&self.repr);
        }
        &self.repr
    }
}

impl std::fmt::Display for ForeignType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.repr)
    }
}
