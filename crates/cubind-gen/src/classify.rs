//! Declaration scoping.
//!
//! A declaration is in scope iff its name carries the library prefix and its
//! kind matches the requested category. There is no allow-list beyond
//! prefix + kind; everything else in the header (CUDA runtime types, system
//! typedefs) falls out here.

use cubind_decl::{Declaration, Kind};

use crate::tables::NameTables;

/// Whether a declaration is an in-scope function.
pub fn is_function_decl(tables: &NameTables, decl: &Declaration) -> bool {
    in_scope(tables, decl) && decl.kind == Kind::Function
}

/// Whether a declaration is an in-scope enum definition.
pub fn is_enum_decl(tables: &NameTables, decl: &Declaration) -> bool {
    in_scope(tables, decl) && decl.kind == Kind::Enum
}

/// Whether a declaration is an in-scope non-enum type (struct or opaque
/// pointer typedef).
pub fn is_other_type_decl(tables: &NameTables, decl: &Declaration) -> bool {
    in_scope(tables, decl) && matches!(decl.kind, Kind::Struct | Kind::Pointer)
}

fn in_scope(tables: &NameTables, decl: &Declaration) -> bool {
    decl.name.starts_with(tables.prefix.as_str())
}

/// Split a declaration stream into (functions, enums, other types),
/// preserving input order and dropping out-of-scope declarations.
pub fn partition<'a>(
    tables: &NameTables,
    decls: &'a [Declaration],
) -> (
    Vec<&'a Declaration>,
    Vec<&'a Declaration>,
    Vec<&'a Declaration>,
) {
    let mut functions = Vec::new();
    let mut enums = Vec::new();
    let mut other_types = Vec::new();
    for decl in decls {
        if is_function_decl(tables, decl) {
            functions.push(decl);
        } else if is_enum_decl(tables, decl) {
            enums.push(decl);
        } else if is_other_type_decl(tables, decl) {
            other_types.push(decl);
        }
    }
    (functions, enums, other_types)
}
