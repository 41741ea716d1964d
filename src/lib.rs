//! The `clarity` crate: ties the four library crates
//! (`clarity_ir`, `clarity_codegen`, `clarity_alloc`, `clarity_runtime`)
//! together behind the `clarityc` CLI surface.
//!
//! There is no front-end here (parser, type checker) — `clarity_ir::Module`
//! is this crate's input, exactly as it is the code generator's. A real
//! front-end would sit upstream of `clarityc compile` and emit the same
//! JSON shape `compile_module` reads.

pub mod cli;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use wasmtime::{Engine, Linker, Module as WasmModule, Store};

use clarity_runtime::{Config, HostState};

/// Deserializes a resolved `clarity_ir::Module` from JSON and lowers it to
/// a WASM binary. The JSON shape is `clarity_ir::Module`'s own `serde`
/// derive, not a bespoke format.
pub fn compile_module(ir_json: &str) -> Result<Vec<u8>> {
    let module: clarity_ir::Module =
        serde_json::from_str(ir_json).context("parsing resolved IR")?;
    clarity_codegen::compile(&module).context("lowering IR to WASM")
}

/// Compiles `ir_path` (a JSON-serialized `clarity_ir::Module`) and writes
/// the resulting WASM binary to `out_path`.
pub fn compile_file(ir_path: &Path, out_path: &Path) -> Result<()> {
    let ir_json = fs::read_to_string(ir_path)
        .with_context(|| format!("reading {}", ir_path.display()))?;
    let wasm = compile_module(&ir_json)?;
    fs::write(out_path, wasm).with_context(|| format!("writing {}", out_path.display()))
}

/// Instantiates `wasm_path` against the full host import table and calls
/// `entry`, an exported `() -> i64` function. Host state is constructed
/// from `Config::from_env()`, matching `wasmtime-cli-flags`' single
/// environment-driven options struct.
pub fn run_module(wasm_path: &Path, entry: &str) -> Result<i64> {
    let wasm_bytes =
        fs::read(wasm_path).with_context(|| format!("reading {}", wasm_path.display()))?;
    let engine = Engine::default();
    let module = WasmModule::new(&engine, &wasm_bytes).context("validating WASM module")?;
    let linker: Linker<HostState> =
        clarity_runtime::build_linker(&engine).context("wiring host imports")?;

    let config = Config::from_env();
    let mut store = Store::new(&engine, HostState::new(0, config));
    let instance = linker
        .instantiate(&mut store, &module)
        .context("instantiating module")?;
    let func = instance
        .get_typed_func::<(), i64>(&mut store, entry)
        .with_context(|| format!("resolving export `{entry}`"))?;
    func.call(&mut store, ()).context("calling entry point")
}

/// Disassembles a WASM binary back to WAT text, for `clarityc explore`.
pub fn explore_module(wasm_path: &Path) -> Result<String> {
    let wasm_bytes =
        fs::read(wasm_path).with_context(|| format!("reading {}", wasm_path.display()))?;
    wasmprinter::print_bytes(&wasm_bytes).context("disassembling module")
}
