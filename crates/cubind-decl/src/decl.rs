//! Top-level C declarations.

use serde::{Deserialize, Serialize};

use crate::ftype::ForeignType;

/// The syntactic kind of a top-level declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// A function declaration.
    Function,
    /// An enum definition.
    Enum,
    /// A struct definition.
    Struct,
    /// A pointer typedef (opaque handle).
    Pointer,
    /// Anything else (unions, scalars, macros the parser surfaces).
    Other,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Kind::Function => "function",
            Kind::Enum => "enum",
            Kind::Struct => "struct",
            Kind::Pointer => "pointer",
            Kind::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// A single top-level declaration from the foreign header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Declaration {
    /// Declared foreign name (e.g. `"cudnnCreate"`, `"cudnnStatus_t"`).
    pub name: String,
    /// Syntactic kind.
    pub kind: Kind,
    /// The declared foreign type.
    pub ty: ForeignType,
}

impl Declaration {
    /// Construct a declaration.
    pub fn new(name: impl Into<String>, kind: Kind, ty: ForeignType) -> Self {
        Self {
            name: name.into(),
            kind,
            ty,
        }
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.kind, self.name, self.ty)
    }
}
