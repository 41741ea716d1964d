use std::collections::HashMap;

use clarity_abi::SourceType;
use wasm_encoder::ValType;

use crate::error::{CodegenError, CodegenResult};

fn val_type_of(ty: &SourceType) -> Option<ValType> {
    match ty.to_wasm_type() {
        clarity_abi::WasmType::I32 => Some(ValType::I32),
        clarity_abi::WasmType::I64 => Some(ValType::I64),
        clarity_abi::WasmType::F64 => Some(ValType::F64),
        clarity_abi::WasmType::None => None,
    }
}

#[derive(Debug, Clone)]
pub struct LocalSlot {
    pub index: u32,
    pub ty: SourceType,
    pub mutable: bool,
}

/// Per-function lowering state: the source-name-to-local-index
/// environment, the list of locals declared beyond the parameters (for
/// the function's locals section), and the label stack tail-call
/// rewriting and early return lowering consult (§4.3).
pub struct FunctionEnv {
    vars: HashMap<String, LocalSlot>,
    extra_locals: Vec<ValType>,
    next_index: u32,
    /// WASM-level types of the function's parameters, in order — needed
    /// by the tail-call rewrite to copy scratch locals back into
    /// parameter slots.
    pub param_indices: Vec<u32>,
}

impl FunctionEnv {
    pub fn new() -> Self {
        FunctionEnv {
            vars: HashMap::new(),
            extra_locals: Vec::new(),
            next_index: 0,
            param_indices: Vec::new(),
        }
    }

    /// Declares a function parameter. Parameters occupy local indices
    /// `0..params.len()` in declaration order (§4.1: "Functions take
    /// parameters in source order").
    pub fn declare_param(&mut self, name: &str, ty: &SourceType) {
        let index = self.next_index;
        self.next_index += 1;
        self.param_indices.push(index);
        self.vars.insert(
            name.to_string(),
            LocalSlot {
                index,
                ty: ty.clone(),
                mutable: false,
            },
        );
    }

    /// Declares a new local for a `let`/`let mut` binding (§4.3).
    pub fn declare_local(&mut self, name: &str, ty: &SourceType, mutable: bool) -> CodegenResult<u32> {
        let index = self.next_index;
        if let Some(vt) = val_type_of(ty) {
            self.extra_locals.push(vt);
            self.next_index += 1;
        }
        self.vars.insert(
            name.to_string(),
            LocalSlot {
                index,
                ty: ty.clone(),
                mutable,
            },
        );
        Ok(index)
    }

    /// Declares an unnamed scratch local (used by tail-call rewriting and
    /// match-temporary binding) and returns its index.
    pub fn declare_scratch(&mut self, ty: &SourceType) -> u32 {
        let index = self.next_index;
        if let Some(vt) = val_type_of(ty) {
            self.extra_locals.push(vt);
            self.next_index += 1;
        }
        index
    }

    pub fn lookup(&self, name: &str) -> CodegenResult<&LocalSlot> {
        self.vars
            .get(name)
            .ok_or_else(|| CodegenError::UndefinedVariable(name.to_string()))
    }

    /// Locals declared after the parameters, in declaration order, for
    /// the function's WASM locals section (each paired with a count of
    /// 1, since we never coalesce runs of the same type).
    pub fn extra_locals(&self) -> &[ValType] {
        &self.extra_locals
    }
}

impl Default for FunctionEnv {
    fn default() -> Self {
        Self::new()
    }
}
