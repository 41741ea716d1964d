//! Lowers a resolved Clarity module (`clarity_ir::Module`) into a WASM
//! binary, per spec.md §4.3. Structural recursion over `clarity_ir::Expr`
//! mirrors how `cranelift-wasm` walks WASM operators one opcode at a time;
//! here the "opcodes" are the resolved IR's expression kinds instead.

mod builder;
mod ctx;
mod env;
mod error;
mod module;
mod pattern;

pub use error::{CodegenError, CodegenResult};
pub use module::compile;
