//! C function signatures.

use serde::{Deserialize, Serialize};

use crate::ftype::ForeignType;

/// A named function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Parameter {
    /// Parameter name (may be empty if the header omits it).
    pub name: String,
    /// Parameter type.
    pub ty: ForeignType,
}

/// A C function signature: name, return type, and ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CSignature {
    /// Function name (matches the C symbol).
    pub name: String,
    /// Return type.
    pub return_type: ForeignType,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

impl CSignature {
    /// A signature with no parameters yet.
    pub fn new(name: impl Into<String>, return_type: ForeignType) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
        }
    }

    /// Append a parameter, builder style.
    pub fn with_param(mut self, name: impl Into<String>, ty: ForeignType) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            ty,
        });
        self
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

impl std::fmt::Display for CSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param.ty)?;
            if !param.name.is_empty() {
                write!(f, " {}", param.name)?;
            }
        }
        write!(f, ")")
    }
}
