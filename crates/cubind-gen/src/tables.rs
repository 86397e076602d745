//! Name tables: the static configuration driving scope, naming, and
//! parameter-role decisions.
//!
//! Tables are loaded (or built from the [`NameTables::cudnn`] preset) once
//! before a generation pass and never mutated afterwards. Every engine
//! operation takes them by shared reference, so independent declarations can
//! be translated concurrently without synchronization.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Read-only lookup tables for one foreign library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NameTables {
    /// Lower-case library prefix; the sole scoping mechanism
    /// (e.g. `"cudnn"`).
    pub prefix: String,
    /// Canonical upper-case enum-constant prefix, the fallback when a
    /// group's common prefix degenerates (e.g. `"CUDNN_"`).
    pub constant_prefix: String,
    /// Target type name treated as raw device memory; values of this type
    /// convert to C through their pointer accessor.
    #[serde(default = "default_memory_type")]
    pub memory_type: String,

    /// Foreign typedef name → target type name, for typedef-backed storage
    /// types exposed by reference.
    #[serde(default)]
    pub type_aliases: BTreeMap<String, String>,
    /// Foreign enum typedef name → target enum type name.
    #[serde(default)]
    pub enum_aliases: BTreeMap<String, String>,
    /// Foreign scalar spelling → target scalar name.
    #[serde(default)]
    pub builtin_aliases: BTreeMap<String, String>,
    /// Target scalar name → foreign scalar spelling, for cast synthesis.
    #[serde(default)]
    pub reverse_builtins: BTreeMap<String, String>,

    /// Foreign names excluded from generation entirely.
    #[serde(default)]
    pub ignored: BTreeSet<String>,
    /// Enum typedef names excluded from generation entirely.
    #[serde(default)]
    pub ignored_enums: BTreeSet<String>,
    /// Functions that become methods on the library context rather than
    /// free functions.
    #[serde(default)]
    pub contextual: BTreeSet<String>,

    /// Function name → parameter names written by the call.
    #[serde(default)]
    pub output_params: BTreeMap<String, BTreeSet<String>>,
    /// Function name → parameter names both read and written by the call.
    #[serde(default)]
    pub io_params: BTreeMap<String, BTreeSet<String>>,
}

fn default_memory_type() -> String {
    "Memory".to_string()
}

impl NameTables {
    /// Parse tables from a TOML string and validate them.
    pub fn parse(input: &str) -> Result<Self> {
        let tables: NameTables = toml::from_str(input)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Check table invariants.
    ///
    /// A name in `ignored` (or `ignored_enums`) must not also be
    /// `contextual`: ignored names are excluded from all generation, so an
    /// overlap means the tables contradict themselves.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(GenError::InvalidTables {
                detail: "prefix must not be empty".to_string(),
            });
        }
        if self.constant_prefix.is_empty() {
            return Err(GenError::InvalidTables {
                detail: "constant-prefix must not be empty".to_string(),
            });
        }
        for name in self.ignored.iter().chain(self.ignored_enums.iter()) {
            if self.contextual.contains(name) {
                return Err(GenError::InvalidTables {
                    detail: format!("'{name}' is both ignored and contextual"),
                });
            }
        }
        Ok(())
    }

    /// Whether a foreign name is excluded from generation.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_enums.contains(name) || self.ignored.contains(name)
    }

    /// Whether a function is generated as a context method.
    pub fn is_contextual(&self, name: &str) -> bool {
        self.contextual.contains(name)
    }

    /// Whether a foreign spelling is a known scalar builtin.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtin_aliases.contains_key(name)
    }

    /// Strip the library prefix and a trailing `_t` from a foreign typedef
    /// name: `cudnnTensorDescriptor_t` → `TensorDescriptor`.
    pub fn trim_decorations<'a>(&self, name: &'a str) -> &'a str {
        let name = name.strip_prefix(self.prefix.as_str()).unwrap_or(name);
        name.strip_suffix("_t").unwrap_or(name)
    }

    /// Whether a foreign name already has a target type assigned in any of
    /// the alias tables.
    pub fn already_declared_type(&self, name: &str) -> bool {
        self.type_aliases.contains_key(name)
            || self.enum_aliases.contains_key(name)
            || self.builtin_aliases.contains_key(name)
    }

    /// Whether a parameter name appears in any output or input-output set.
    pub fn already_generated(&self, name: &str) -> bool {
        self.output_params
            .values()
            .chain(self.io_params.values())
            .any(|params| params.contains(name))
    }

    /// The built-in tables for NVIDIA's cuDNN library.
    pub fn cudnn() -> Self {
        let tables = Self {
            prefix: "cudnn".to_string(),
            constant_prefix: "CUDNN_".to_string(),
            memory_type: default_memory_type(),
            type_aliases: string_map(&[
                ("cudnnHandle_t", "Context"),
                ("cudnnTensorDescriptor_t", "TensorDescriptor"),
                ("cudnnFilterDescriptor_t", "FilterDescriptor"),
                ("cudnnConvolutionDescriptor_t", "ConvolutionDescriptor"),
                ("cudnnPoolingDescriptor_t", "PoolingDescriptor"),
                ("cudnnActivationDescriptor_t", "ActivationDescriptor"),
                ("cudnnLRNDescriptor_t", "LRNDescriptor"),
                ("cudnnOpTensorDescriptor_t", "OpTensorDescriptor"),
                ("cudnnReduceTensorDescriptor_t", "ReduceTensorDescriptor"),
                ("cudnnRNNDescriptor_t", "RNNDescriptor"),
                ("cudnnDropoutDescriptor_t", "DropoutDescriptor"),
                (
                    "cudnnSpatialTransformerDescriptor_t",
                    "SpatialTransformerDescriptor",
                ),
                ("cudnnCTCLossDescriptor_t", "CTCLossDescriptor"),
            ]),
            enum_aliases: string_map(&[
                ("cudnnStatus_t", "Status"),
                ("cudnnDataType_t", "DataType"),
                ("cudnnTensorFormat_t", "TensorFormat"),
                ("cudnnNanPropagation_t", "NanPropagation"),
                ("cudnnOpTensorOp_t", "OpTensorOp"),
                ("cudnnReduceTensorOp_t", "ReduceTensorOp"),
                ("cudnnReduceTensorIndices_t", "ReduceTensorIndices"),
                ("cudnnIndicesType_t", "IndicesType"),
                ("cudnnPoolingMode_t", "PoolingMode"),
                ("cudnnActivationMode_t", "ActivationMode"),
                ("cudnnLRNMode_t", "LRNMode"),
                ("cudnnDivNormMode_t", "DivNormMode"),
                ("cudnnConvolutionFwdAlgo_t", "ConvolutionFwdAlgo"),
                ("cudnnRNNMode_t", "RNNMode"),
                ("cudnnDirectionMode_t", "DirectionMode"),
                ("cudnnRNNInputMode_t", "RNNInputMode"),
                ("cudnnCTCLossAlgo_t", "CTCLossAlgo"),
                ("cudnnSamplerType_t", "SamplerType"),
                ("cudnnSoftmaxAlgorithm_t", "SoftmaxAlgorithm"),
                ("cudnnSoftmaxMode_t", "SoftmaxMode"),
                ("cudnnMathType_t", "MathType"),
                ("cudnnDeterminism_t", "Determinism"),
            ]),
            builtin_aliases: string_map(&[
                ("int", "int"),
                ("unsigned int", "uint"),
                ("unsigned long long", "uint64"),
                ("float", "float32"),
                ("double", "float64"),
                ("size_t", "uintptr"),
                ("void*", "Memory"),
            ]),
            reverse_builtins: string_map(&[
                ("int", "int"),
                ("uint", "uint"),
                ("uint64", "ulonglong"),
                ("float32", "float"),
                ("float64", "double"),
                ("uintptr", "size_t"),
            ]),
            ignored: string_set(&[
                "cudnnGetErrorString",
                "cudnnGetVersion",
                "cudnnGetCudartVersion",
                "cudnnGetProperty",
                "cudnnQueryRuntimeError",
            ]),
            ignored_enums: string_set(&["cudnnErrQueryMode_t", "cudnnSeverity_t"]),
            contextual: string_set(&[
                "cudnnCreate",
                "cudnnDestroy",
                "cudnnSetStream",
                "cudnnGetStream",
            ]),
            output_params: param_map(&[
                ("cudnnCreate", &["handle"]),
                ("cudnnCreateTensorDescriptor", &["tensorDesc"]),
                ("cudnnCreateFilterDescriptor", &["filterDesc"]),
                ("cudnnCreateConvolutionDescriptor", &["convDesc"]),
                ("cudnnCreatePoolingDescriptor", &["poolingDesc"]),
                ("cudnnCreateActivationDescriptor", &["activationDesc"]),
                ("cudnnCreateReduceTensorDescriptor", &["reduceTensorDesc"]),
                ("cudnnGetStream", &["streamId"]),
                ("cudnnGetConvolutionForwardWorkspaceSize", &["sizeInBytes"]),
                ("cudnnGetReductionWorkspaceSize", &["sizeInBytes"]),
                ("cudnnDropoutGetStatesSize", &["sizeInBytes"]),
            ]),
            io_params: param_map(&[
                ("cudnnAddTensor", &["C"]),
                ("cudnnOpTensor", &["C"]),
                ("cudnnScaleTensor", &["y"]),
                ("cudnnTransformTensor", &["y"]),
            ]),
        };
        debug_assert!(tables.validate().is_ok());
        tables
    }
}

fn string_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn string_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn param_map(entries: &[(&str, &[&str])]) -> BTreeMap<String, BTreeSet<String>> {
    entries
        .iter()
        .map(|(func, params)| (func.to_string(), string_set(params)))
        .collect()
}
