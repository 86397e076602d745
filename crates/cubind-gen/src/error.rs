//! Generator error types.

/// Errors that can occur during binding generation.
///
/// Unresolved lookups are authoring-time gaps in the name tables, not
/// transient conditions; they carry the attempted key so a maintainer can
/// add the missing entry.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// No name-table entry matched a foreign type key.
    #[error("unresolvable type: no table entry for key '{key}'")]
    UnresolvedType { key: String },

    /// No reverse-conversion rule matched a resolved type.
    #[error("no known conversion to C for '{value}' of type '{type_name}'")]
    UnresolvedConversion { value: String, type_name: String },

    /// Name tables failed validation.
    #[error("invalid name tables: {detail}")]
    InvalidTables { detail: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error reading a table file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GenError>;
