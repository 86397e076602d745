//! Binding-generation engine for cuDNN-style C APIs.
//!
//! Given a parsed C API surface (declarations and function signatures from
//! `cubind-decl`), this crate decides which declarations are in scope,
//! translates foreign identifiers and type names into idiomatic target
//! names, classifies function parameters by role, and synthesizes the
//! reverse-conversion expressions used at generated call sites. The header
//! parser upstream and the code emitter downstream are external to this
//! crate.
//!
//! All operations are pure functions over immutable inputs plus a read-only
//! [`NameTables`] built once per generation pass, so independent
//! declarations can be processed in any order or in parallel.
//!
//! ## Modules
//!
//! - [`tables`] — Name tables: scope, alias, and parameter-role configuration
//! - [`classify`] — Prefix/kind scoping of declarations
//! - [`ident`] — Enum-constant identifier translation
//! - [`resolve`] — Layered foreign-type resolution
//! - [`convert`] — Reverse-conversion expression synthesis
//! - [`params`] — Output / input-output parameter classification

pub mod classify;
pub mod convert;
pub mod error;
pub mod ident;
pub mod params;
pub mod resolve;
pub mod tables;

// Re-export key types for convenience
pub use classify::{is_enum_decl, is_function_decl, is_other_type_decl};
pub use convert::synthesize_conversion;
pub use error::{GenError, Result};
pub use ident::{longest_common_prefix, translate_enum_name};
pub use params::{classify_outputs, classify_outputs_and_ios};
pub use resolve::{resolve_type_name, ResolvedType};
pub use tables::NameTables;
