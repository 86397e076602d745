//! Parsed C declaration model for the cubind generator.
//!
//! These types describe a foreign C API surface as produced by an external
//! header parser: top-level declarations, the foreign types behind them, and
//! function signatures with named parameters. They are plain read-only data;
//! all classification and translation logic lives in `cubind-gen`.
//!
//! ## Modules
//!
//! - [`ftype`] — Foreign type representation with typedef and const handling
//! - [`decl`] — Top-level declarations and their kinds
//! - [`csig`] — C function signatures and parameters

pub mod csig;
pub mod decl;
pub mod ftype;

// Re-export key types for convenience
pub use csig::{CSignature, Parameter};
pub use decl::{Declaration, Kind};
pub use ftype::ForeignType;
