//! Host allocator and region reclamation over WASM linear memory (spec.md §4.2).
//!
//! This crate owns the single source of truth for "what does this heap
//! pointer mean": a bump pointer, the free lists it feeds, the
//! pointer-to-size-class allocation map, and the content-addressed string
//! intern table. It has no knowledge of the ABI's type system (that's
//! `clarity-abi`) or of WASM encoding (that's `clarity-codegen`); it only
//! needs somewhere to read and write bytes, which is why it is generic
//! over `LinearMemory` rather than hard-wired to `wasmtime::Memory`.

mod allocator;
mod memory;

pub use allocator::{Allocator, AllocatorStats, ArenaMark, SizeClass};
pub use memory::{LinearMemory, MemoryError, VecMemory};
