//! Enum-constant identifier translation.
//!
//! Foreign enum constants like `CUDNN_POOLING_AVERAGE_COUNT_INCLUDE_PADDING`
//! become target identifiers by stripping the longest common prefix of their
//! enum group, then camel-casing what remains. Two small override tables
//! bracket the mechanical rules: full-name overrides run first (names where
//! the rules would produce ambiguous results), abbreviation fixups run last
//! (camel-casing mangles ReLU, LSTM, GRU).
//!
//! The LCP for a group must be computed over the entire group before any
//! member is translated, so callers batch group members rather than
//! streaming constants one at a time.

use crate::tables::NameTables;

/// Translate one enum-constant name using the longest common prefix of its
/// group.
pub fn translate_enum_name(tables: &NameTables, lcp: &str, name: &str) -> String {
    if let Some(literal) = full_name_override(name) {
        return literal.to_string();
    }

    // A degenerate LCP in this band is just the library prefix plus noise
    // (a single-member group, or siblings agreeing on one extra letter);
    // strip the canonical constant prefix instead.
    let stem = if lcp.len() > 6 && lcp.len() < 9 {
        tables.constant_prefix.as_str()
    } else {
        lcp
    };
    let trimmed = name.strip_prefix(stem).unwrap_or(name);
    let mut lowered = trimmed.to_lowercase();

    // Group-specific rewrites, keyed by the group's original LCP.
    match lcp {
        "CUDNN_TENSOR_N" => {
            // tensor layout: NCHW, NHWC, NCHW_VECT_C, ...
            lowered.insert(0, 'n');
            let head = lowered
                .char_indices()
                .nth(4)
                .map(|(i, _)| i)
                .unwrap_or(lowered.len());
            lowered = format!("{}{}", lowered[..head].to_uppercase(), &lowered[head..]);
        }
        "CUDNN_REDUCE_TENSOR_" => {
            lowered = format!("Reduce_{lowered}");
        }
        "CUDNN_CTC_LOSS_ALGO_" => {
            lowered.push_str("CTCLoss");
        }
        _ => {}
    }

    let camel = snake_to_camel(&lowered, true);
    match abbreviation_fixup(&camel) {
        Some(fixed) => fixed.to_string(),
        None => camel,
    }
}

/// Full foreign names whose mechanical translation would be ambiguous or
/// start with a digit.
fn full_name_override(name: &str) -> Option<&'static str> {
    let literal = match name {
        "CUDNN_32BIT_INDICES" => "Indices32",
        "CUDNN_64BIT_INDICES" => "Indices64",
        "CUDNN_16BIT_INDICES" => "Indices16",
        "CUDNN_8BIT_INDICES" => "Indices8",
        "CUDNN_POOLING_MAX" => "MaxPooling",
        "CUDNN_LRN_CROSS_CHANNEL_DIM1" => "CrossChannelDim1",
        "CUDNN_DIVNORM_PRECOMPUTED_MEANS" => "PrecomputedMeans",
        "CUDNN_SAMPLER_BILINEAR" => "Bilinear",
        _ => return None,
    };
    Some(literal)
}

/// Abbreviations that camel-casing mangles.
fn abbreviation_fixup(name: &str) -> Option<&'static str> {
    let fixed = match name {
        "Relu" => "ReLU",
        "ClippedRelu" => "ClippedReLU",
        "RnnRelu" => "RNNReLU",
        "RnnTanh" => "RNNTanh",
        "Lstm" => "LSTM",
        "Gru" => "GRU",
        _ => return None,
    };
    Some(fixed)
}

/// Convert a snake-style string to camel style.
///
/// Each `_`-separated segment has its first letter capitalized; with
/// `capitalize_first` false the leading segment is left as-is.
pub fn snake_to_camel(s: &str, capitalize_first: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, segment) in s.split('_').enumerate() {
        if segment.is_empty() {
            continue;
        }
        if i == 0 && !capitalize_first {
            out.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Lower-case the first character, for parameter and field naming.
pub fn unexport(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The longest common prefix across one enum group's constant names.
pub fn longest_common_prefix(names: &[&str]) -> String {
    let Some((first, rest)) = names.split_first() else {
        return String::new();
    };
    let mut prefix_len = first.len();
    for name in rest {
        let common = first
            .bytes()
            .zip(name.bytes())
            .take_while(|(a, b)| a == b)
            .count();
        prefix_len = prefix_len.min(common);
    }
    while !first.is_char_boundary(prefix_len) {
        prefix_len -= 1;
    }
    first[..prefix_len].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cudnn() -> NameTables {
        NameTables::cudnn()
    }

    #[test]
    fn override_wins_regardless_of_lcp() {
        let tables = cudnn();
        for lcp in ["", "CUDNN_", "CUDNN_32BIT_", "CUDNN_32BIT_INDICESX"] {
            assert_eq!(
                translate_enum_name(&tables, lcp, "CUDNN_32BIT_INDICES"),
                "Indices32"
            );
        }
        assert_eq!(
            translate_enum_name(&tables, "CUDNN_POOLING_", "CUDNN_POOLING_MAX"),
            "MaxPooling"
        );
    }

    #[test]
    fn degenerate_lcp_falls_back_to_constant_prefix() {
        let tables = cudnn();
        // 7 and 8 characters sit in the degenerate band; 6 and 9 do not.
        for lcp in ["CUDNN_D", "CUDNN_DA"] {
            assert_eq!(
                translate_enum_name(&tables, lcp, "CUDNN_DATA_FLOAT"),
                translate_enum_name(&tables, "CUDNN_", "CUDNN_DATA_FLOAT")
            );
        }
        assert_eq!(
            translate_enum_name(&tables, "CUDNN_DATA_", "CUDNN_DATA_FLOAT"),
            "Float"
        );
    }

    #[test]
    fn tensor_format_group() {
        let tables = cudnn();
        assert_eq!(
            translate_enum_name(&tables, "CUDNN_TENSOR_N", "CUDNN_TENSOR_NCHW"),
            "NCHW"
        );
        assert_eq!(
            translate_enum_name(&tables, "CUDNN_TENSOR_N", "CUDNN_TENSOR_NHWC"),
            "NHWC"
        );
        assert_eq!(
            translate_enum_name(&tables, "CUDNN_TENSOR_N", "CUDNN_TENSOR_NCHW_VECT_C"),
            "NCHWVectC"
        );
    }

    #[test]
    fn reduce_tensor_group() {
        let tables = cudnn();
        assert_eq!(
            translate_enum_name(&tables, "CUDNN_REDUCE_TENSOR_", "CUDNN_REDUCE_TENSOR_ADD"),
            "ReduceAdd"
        );
        assert_eq!(
            translate_enum_name(&tables, "CUDNN_REDUCE_TENSOR_", "CUDNN_REDUCE_TENSOR_MUL"),
            "ReduceMul"
        );
    }

    #[test]
    fn ctc_loss_group() {
        let tables = cudnn();
        assert_eq!(
            translate_enum_name(
                &tables,
                "CUDNN_CTC_LOSS_ALGO_",
                "CUDNN_CTC_LOSS_ALGO_DETERMINISTIC"
            ),
            "DeterministicCTCLoss"
        );
    }

    #[test]
    fn abbreviation_fixups() {
        let tables = cudnn();
        assert_eq!(
            translate_enum_name(&tables, "CUDNN_ACTIVATION_", "CUDNN_ACTIVATION_RELU"),
            "ReLU"
        );
        assert_eq!(
            translate_enum_name(
                &tables,
                "CUDNN_ACTIVATION_",
                "CUDNN_ACTIVATION_CLIPPED_RELU"
            ),
            "ClippedReLU"
        );
        // RNN mode group: LCP degenerates to exactly "CUDNN_" (6 chars),
        // which is outside the fallback band and used as-is.
        assert_eq!(translate_enum_name(&tables, "CUDNN_", "CUDNN_LSTM"), "LSTM");
        assert_eq!(translate_enum_name(&tables, "CUDNN_", "CUDNN_GRU"), "GRU");
        assert_eq!(
            translate_enum_name(&tables, "CUDNN_", "CUDNN_RNN_RELU"),
            "RNNReLU"
        );
        assert_eq!(
            translate_enum_name(&tables, "CUDNN_", "CUDNN_RNN_TANH"),
            "RNNTanh"
        );
    }

    #[test]
    fn empty_remainder_is_legal() {
        let tables = cudnn();
        assert_eq!(translate_enum_name(&tables, "CUDNN_DATA_FLOAT", "CUDNN_DATA_FLOAT"), "");
    }

    #[test]
    fn snake_to_camel_cases() {
        assert_eq!(snake_to_camel("not_propagate_nan", true), "NotPropagateNan");
        assert_eq!(snake_to_camel("not_propagate_nan", false), "notPropagateNan");
        assert_eq!(snake_to_camel("", true), "");
        assert_eq!(snake_to_camel("__double__under__", true), "DoubleUnder");
    }

    #[test]
    fn unexport_lowers_first_char() {
        assert_eq!(unexport("TensorDesc"), "tensorDesc");
        assert_eq!(unexport("x"), "x");
        assert_eq!(unexport(""), "");
    }

    #[test]
    fn lcp_over_group() {
        assert_eq!(
            longest_common_prefix(&[
                "CUDNN_TENSOR_NCHW",
                "CUDNN_TENSOR_NHWC",
                "CUDNN_TENSOR_NCHW_VECT_C",
            ]),
            "CUDNN_TENSOR_N"
        );
        assert_eq!(
            longest_common_prefix(&["CUDNN_RNN_RELU", "CUDNN_LSTM"]),
            "CUDNN_"
        );
        assert_eq!(longest_common_prefix(&["CUDNN_ONLY"]), "CUDNN_ONLY");
        assert_eq!(longest_common_prefix(&[]), "");
    }
}
