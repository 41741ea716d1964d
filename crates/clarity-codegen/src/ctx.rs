use std::collections::HashMap;

use clarity_abi::{FnSig, SourceType};
use wasm_encoder::ValType;

pub(crate) fn val_type_of(ty: &SourceType) -> Option<ValType> {
    match ty.to_wasm_type() {
        clarity_abi::WasmType::I32 => Some(ValType::I32),
        clarity_abi::WasmType::I64 => Some(ValType::I64),
        clarity_abi::WasmType::F64 => Some(ValType::F64),
        clarity_abi::WasmType::None => None,
    }
}

pub(crate) fn sig_key(params: &[SourceType], result: &SourceType) -> (Vec<ValType>, Option<ValType>) {
    (
        params.iter().filter_map(val_type_of).collect(),
        val_type_of(result),
    )
}

/// A top-level function's resolved signature and its index in the
/// combined import+local function index space (imports are always
/// numbered first, per the WASM module encoding).
#[derive(Debug, Clone)]
pub struct FuncInfo {
    pub index: u32,
    pub params: Vec<SourceType>,
    pub result: SourceType,
}

/// Whole-module state shared by every function's lowering: the
/// name-to-index tables for direct and indirect calls, and the
/// precomputed layout of the static string data segment (§4.3: "string
/// literals are materialized once per distinct content").
pub struct ModuleCtx {
    pub functions: HashMap<String, FuncInfo>,
    pub host_import_index: HashMap<&'static str, u32>,
    pub string_offsets: HashMap<String, u32>,
    pub heap_base: u32,
    pub type_indices: HashMap<(Vec<ValType>, Option<ValType>), u32>,
}

impl ModuleCtx {
    pub fn host_import_call_index(&self, name: &str) -> Option<u32> {
        self.host_import_index.get(name).copied()
    }

    /// The WASM type-section index for an indirect call's static
    /// signature (§4.3 "An indirect call... emits `call_indirect` through
    /// the function table using the caller's static signature"). Every
    /// signature reachable from the IR is registered by `module.rs`
    /// before any function body is lowered, so this never misses.
    pub fn call_indirect_type_index(&self, sig: &FnSig) -> u32 {
        let key = sig_key(&sig.params, &sig.result);
        *self
            .type_indices
            .get(&key)
            .expect("module.rs pre-registers every call_indirect signature")
    }
}
