//! Reverse-conversion synthesis.
//!
//! Generated call sites hold wrapped target-language values but must hand
//! the foreign representation back to C. Given a value name and its
//! resolved type, this module produces the source expression that recovers
//! the C value. Rules run in a fixed order, specific before general, and a
//! miss is a hard error: it means the name tables need a new entry, and the
//! emitter must never paper over it.

use crate::error::{GenError, Result};
use crate::resolve::ResolvedType;
use crate::tables::NameTables;

/// Synthesize the expression converting `value` back to its C
/// representation.
///
/// Resolution order, first match wins:
/// 1. enum wrapper → its C-conversion accessor
/// 2. typedef-backed storage → its internal handle field
/// 3. scalar builtin → a C cast
/// 4. raw device memory → its pointer accessor
pub fn synthesize_conversion(
    tables: &NameTables,
    value: &str,
    resolved: &ResolvedType,
) -> Result<String> {
    let type_name = resolved.name.as_str();

    if tables.enum_aliases.values().any(|v| v == type_name) {
        return Ok(format!("{value}.c()"));
    }
    // Pointer indirection is carried on `resolved`, so both `Context` and
    // `*Context` land here.
    if tables.type_aliases.values().any(|v| v == type_name) {
        return Ok(format!("{value}.internal"));
    }
    if let Some(c_type) = tables.reverse_builtins.get(type_name) {
        return Ok(format!("C.{c_type}({value})"));
    }
    if type_name == tables.memory_type {
        return Ok(format!("{value}.Pointer()"));
    }

    Err(GenError::UnresolvedConversion {
        value: value.to_string(),
        type_name: resolved.to_string(),
    })
}
