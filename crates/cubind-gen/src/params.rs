//! Parameter-role classification.
//!
//! cuDNN-style APIs return results through pointer parameters, so the
//! wrapper generator needs to know which positional parameters the call
//! writes. That is not inferable from the C types alone (every descriptor
//! is a pointer); the roles come from the per-function name tables.
//!
//! `None` means the tables carry no entries for the function at all — the
//! emitter generates a bare side-effecting call. An empty map means entries
//! exist but none matched a parameter by name.

use std::collections::BTreeMap;

use cubind_decl::CSignature;

use crate::tables::NameTables;

/// Map parameter positions to names for parameters the call writes.
pub fn classify_outputs(
    tables: &NameTables,
    sig: &CSignature,
) -> Option<BTreeMap<usize, String>> {
    let outputs = tables.output_params.get(&sig.name)?;
    if outputs.is_empty() {
        return None;
    }
    Some(collect(sig, |name| outputs.contains(name)))
}

/// Map parameter positions to names for parameters the call writes or both
/// reads and writes.
pub fn classify_outputs_and_ios(
    tables: &NameTables,
    sig: &CSignature,
) -> Option<BTreeMap<usize, String>> {
    let outputs = tables.output_params.get(&sig.name);
    let ios = tables.io_params.get(&sig.name);
    let known = outputs.map_or(0, |s| s.len()) + ios.map_or(0, |s| s.len());
    if known == 0 {
        return None;
    }
    Some(collect(sig, |name| {
        outputs.is_some_and(|s| s.contains(name)) || ios.is_some_and(|s| s.contains(name))
    }))
}

fn collect(sig: &CSignature, mut include: impl FnMut(&str) -> bool) -> BTreeMap<usize, String> {
    sig.parameters()
        .iter()
        .enumerate()
        .filter(|(_, p)| include(&p.name))
        .map(|(i, p)| (i, p.name.clone()))
        .collect()
}
