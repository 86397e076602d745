//! Foreign-type resolution.
//!
//! Resolution is a layered lookup over the name tables: typedef-backed
//! storage types first, then enum wrappers, then scalar builtins. A miss is
//! a hard error rather than a silent default, since an unmapped type would
//! corrupt every generated signature that mentions it.

use cubind_decl::{Declaration, ForeignType};

use crate::error::{GenError, Result};
use crate::tables::NameTables;

/// A foreign type resolved to its target-language name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Target type name, without any pointer marker.
    pub name: String,
    /// Whether the target exposes this type by reference. True for
    /// typedef-backed storage types (the values of the type-alias table).
    pub requires_pointer: bool,
}

impl std::fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.requires_pointer {
            write!(f, "*{}", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Resolve a foreign type to its target name.
///
/// Lookup order: type aliases, enum aliases, builtin aliases; first hit
/// wins. The lookup key is the typedef name when present, else the
/// const-stripped C spelling.
pub fn resolve_type_name(tables: &NameTables, ty: &ForeignType) -> Result<ResolvedType> {
    let key = ty.lookup_key();
    let name = tables
        .type_aliases
        .get(key)
        .or_else(|| tables.enum_aliases.get(key))
        .or_else(|| tables.builtin_aliases.get(key))
        .ok_or_else(|| GenError::UnresolvedType {
            key: key.to_string(),
        })?;
    // Typedef-backed storage is passed by reference, so a resolved name
    // that is itself a type-alias value needs pointer indirection.
    let requires_pointer = tables.type_aliases.values().any(|v| v == name);
    Ok(ResolvedType {
        name: name.clone(),
        requires_pointer,
    })
}

/// Resolve and render a foreign type as its final target spelling,
/// pointer marker included.
pub fn translated_type_name(tables: &NameTables, ty: &ForeignType) -> Result<String> {
    Ok(resolve_type_name(tables, ty)?.to_string())
}

/// Find the first declaration whose translated type name equals `name`.
///
/// A linear scan: declaration sets are bounded by the size of one foreign
/// API, so no index is warranted. Declarations whose types do not resolve
/// are skipped.
pub fn lookup_by_translated_name<'a>(
    tables: &NameTables,
    decls: &'a [Declaration],
    name: &str,
) -> Option<&'a Declaration> {
    decls.iter().find(|d| {
        resolve_type_name(tables, &d.ty)
            .map(|resolved| resolved.name == name)
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubind_decl::Kind;

    #[test]
    fn typedef_backed_types_require_pointer() {
        let tables = NameTables::cudnn();
        let ty = ForeignType::typedef("struct cudnnContext*", "cudnnHandle_t");
        let resolved = resolve_type_name(&tables, &ty).unwrap();
        assert_eq!(resolved.name, "Context");
        assert!(resolved.requires_pointer);
        assert_eq!(resolved.to_string(), "*Context");
    }

    #[test]
    fn enums_and_builtins_resolve_by_value() {
        let tables = NameTables::cudnn();
        let status = ForeignType::typedef("enum cudnnStatus", "cudnnStatus_t");
        let resolved = resolve_type_name(&tables, &status).unwrap();
        assert_eq!(resolved.name, "Status");
        assert!(!resolved.requires_pointer);

        let scalar = ForeignType::new("float");
        let resolved = resolve_type_name(&tables, &scalar).unwrap();
        assert_eq!(resolved.to_string(), "float32");
    }

    #[test]
    fn const_qualifier_is_transparent() {
        let tables = NameTables::cudnn();
        let ty = ForeignType::const_qualified("float");
        assert_eq!(translated_type_name(&tables, &ty).unwrap(), "float32");
    }

    #[test]
    fn unknown_type_is_hard_error() {
        let tables = NameTables::cudnn();
        let ty = ForeignType::new("struct cudaGraph*");
        let err = resolve_type_name(&tables, &ty).unwrap_err();
        match err {
            GenError::UnresolvedType { key } => assert_eq!(key, "struct cudaGraph*"),
            other => panic!("expected UnresolvedType, got {other}"),
        }
    }

    #[test]
    fn lookup_scans_by_translated_name() {
        let tables = NameTables::cudnn();
        let decls = vec![
            Declaration::new(
                "cudnnStatus_t",
                Kind::Enum,
                ForeignType::typedef("enum cudnnStatus", "cudnnStatus_t"),
            ),
            Declaration::new(
                "cudnnHandle_t",
                Kind::Pointer,
                ForeignType::typedef("struct cudnnContext*", "cudnnHandle_t"),
            ),
        ];
        let found = lookup_by_translated_name(&tables, &decls, "Context").unwrap();
        assert_eq!(found.name, "cudnnHandle_t");
        assert!(lookup_by_translated_name(&tables, &decls, "Nonesuch").is_none());
    }
}
