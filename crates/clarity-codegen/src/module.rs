use std::collections::{HashMap, HashSet};

use clarity_abi::{FnSig, SourceType, WasmType, HEADER_LEN, HOST_IMPORTS, PTR_ALIGN};
use clarity_ir::{Expr, ExprKind, Module};
use wasm_encoder::{
    CodeSection, ConstExpr, DataSection, ElementSection, Elements, EntityType, ExportKind,
    ExportSection, FunctionSection, GlobalSection, GlobalType, ImportSection, MemorySection,
    MemoryType, Module as WasmModule, RefType, TableSection, TableType, TypeSection, ValType,
};

use crate::builder::FunctionBuilder;
use crate::ctx::{sig_key, FuncInfo, ModuleCtx};
use crate::error::CodegenResult;

/// Every WASM page is 64 KiB (§4.2 shares this constant with the allocator).
const PAGE_SIZE: u32 = 65536;

/// Byte offset the static string data segment starts at. Leaving the first
/// few bytes unused keeps pointer `0` permanently invalid, matching the
/// allocator's own convention that no live allocation ever starts there
/// (spec.md §3 invariants).
const STRINGS_BASE: u32 = 8;

fn wasm_type_to_val_type(ty: WasmType) -> Option<ValType> {
    match ty {
        WasmType::I32 => Some(ValType::I32),
        WasmType::I64 => Some(ValType::I64),
        WasmType::F64 => Some(ValType::F64),
        WasmType::None => None,
    }
}

/// Compiles a whole resolved module into a WASM binary (spec.md §4.3,
/// "Whole-module compilation"). This is the crate's only public entry
/// point: everything else here exists to serve this one pass.
pub fn compile(module: &Module) -> CodegenResult<Vec<u8>> {
    tracing::debug!(
        functions = module.functions.len(),
        records = module.records.len(),
        unions = module.unions.len(),
        "lowering module to wasm"
    );
    let mut strings = Vec::new();
    let mut seen_strings = HashSet::new();
    let mut call_sigs: Vec<FnSig> = Vec::new();
    let mut seen_sigs = HashSet::new();
    for f in &module.functions {
        collect(&f.body, &mut strings, &mut seen_strings, &mut call_sigs, &mut seen_sigs);
    }

    let mut type_order: Vec<(Vec<ValType>, Option<ValType>)> = Vec::new();
    let mut type_indices: HashMap<(Vec<ValType>, Option<ValType>), u32> = HashMap::new();
    let mut register_type = |key: (Vec<ValType>, Option<ValType>)| -> u32 {
        if let Some(&idx) = type_indices.get(&key) {
            return idx;
        }
        let idx = type_order.len() as u32;
        type_order.push(key.clone());
        type_indices.insert(key, idx);
        idx
    };

    let mut host_import_index = HashMap::new();
    for (i, import) in HOST_IMPORTS.iter().enumerate() {
        let key = (
            import.params.iter().filter_map(|p| wasm_type_to_val_type(*p)).collect(),
            wasm_type_to_val_type(import.result),
        );
        register_type(key);
        host_import_index.insert(import.name, i as u32);
    }

    let mut functions = HashMap::new();
    for (i, f) in module.functions.iter().enumerate() {
        let index = HOST_IMPORTS.len() as u32 + i as u32;
        let param_tys: Vec<SourceType> = f.params.iter().map(|p| p.ty.clone()).collect();
        register_type(sig_key(&param_tys, &f.result));
        functions.insert(
            f.name.clone(),
            FuncInfo {
                index,
                params: param_tys,
                result: f.result.clone(),
            },
        );
    }

    for sig in &call_sigs {
        register_type(sig_key(&sig.params, &sig.result));
    }

    let mut string_offsets = HashMap::new();
    let mut data_bytes = Vec::new();
    let mut cursor = STRINGS_BASE;
    for s in &strings {
        string_offsets.insert(s.clone(), cursor);
        let bytes = s.as_bytes();
        data_bytes.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
        data_bytes.extend_from_slice(bytes);
        let written = HEADER_LEN + bytes.len() as u32;
        let padded = align_up(written, PTR_ALIGN);
        for _ in written..padded {
            data_bytes.push(0);
        }
        cursor += padded;
    }
    let heap_base = align_up(cursor, PTR_ALIGN);

    let ctx = ModuleCtx {
        functions,
        host_import_index,
        string_offsets,
        heap_base,
        type_indices,
    };

    let mut type_section = TypeSection::new();
    for (params, result) in &type_order {
        type_section.function(params.iter().copied(), result.iter().copied());
    }

    let mut import_section = ImportSection::new();
    for import in HOST_IMPORTS.iter() {
        let key = (
            import.params.iter().filter_map(|p| wasm_type_to_val_type(*p)).collect(),
            wasm_type_to_val_type(import.result),
        );
        let type_index = ctx.type_indices[&key];
        import_section.import(import.module, import.name, EntityType::Function(type_index));
    }

    let mut function_section = FunctionSection::new();
    let mut code_section = CodeSection::new();
    for f in &module.functions {
        let param_tys: Vec<SourceType> = f.params.iter().map(|p| p.ty.clone()).collect();
        let type_index = ctx.type_indices[&sig_key(&param_tys, &f.result)];
        function_section.function(type_index);

        let mut builder = FunctionBuilder::new(&ctx, f.name.clone(), f.result.clone());
        for p in &f.params {
            builder.env.declare_param(&p.name, &p.ty);
        }
        let func = builder.lower_body(&f.body)?;
        code_section.function(&func);
    }

    let total_fns = HOST_IMPORTS.len() as u32 + module.functions.len() as u32;
    let mut table_section = TableSection::new();
    table_section.table(TableType {
        element_type: RefType::FUNCREF,
        minimum: total_fns as u64,
        maximum: Some(total_fns as u64),
        table64: false,
        shared: false,
    });

    let mut element_section = ElementSection::new();
    let all_fn_indices: Vec<u32> = (0..total_fns).collect();
    element_section.active(
        Some(0),
        &ConstExpr::i32_const(0),
        Elements::Functions(all_fn_indices.into()),
    );

    let initial_pages = ((heap_base + PAGE_SIZE - 1) / PAGE_SIZE).max(1);
    let mut memory_section = MemorySection::new();
    memory_section.memory(MemoryType {
        minimum: initial_pages as u64,
        maximum: None,
        memory64: false,
        shared: false,
        page_size_log2: None,
    });

    let mut global_section = GlobalSection::new();
    global_section.global(
        GlobalType {
            val_type: ValType::I32,
            mutable: false,
            shared: false,
        },
        &ConstExpr::i32_const(heap_base as i32),
    );

    let mut export_section = ExportSection::new();
    export_section.export("memory", ExportKind::Memory, 0);
    export_section.export("__heap_base", ExportKind::Global, 0);
    for f in &module.functions {
        if f.exported {
            let info = &ctx.functions[&f.name];
            export_section.export(&f.name, ExportKind::Func, info.index);
        }
    }

    let mut data_section = DataSection::new();
    data_section.active(0, &ConstExpr::i32_const(STRINGS_BASE as i32), data_bytes);

    let mut wasm_module = WasmModule::new();
    wasm_module.section(&type_section);
    wasm_module.section(&import_section);
    wasm_module.section(&function_section);
    wasm_module.section(&table_section);
    wasm_module.section(&memory_section);
    wasm_module.section(&global_section);
    wasm_module.section(&export_section);
    wasm_module.section(&element_section);
    wasm_module.section(&code_section);
    wasm_module.section(&data_section);

    Ok(wasm_module.finish())
}

fn align_up(value: u32, align: u32) -> u32 {
    (value + align - 1) & !(align - 1)
}

/// Collects every distinct string literal (in first-appearance order, for
/// stable output across compiles) and every distinct `call_indirect`
/// signature reachable from `expr`.
fn collect(
    expr: &Expr,
    strings: &mut Vec<String>,
    seen_strings: &mut HashSet<String>,
    sigs: &mut Vec<FnSig>,
    seen_sigs: &mut HashSet<(Vec<ValType>, Option<ValType>)>,
) {
    match &expr.kind {
        ExprKind::StringLit(s) => {
            if seen_strings.insert(s.clone()) {
                strings.push(s.clone());
            }
        }
        ExprKind::IntLit(_) | ExprKind::FloatLit(_) | ExprKind::BoolLit(_) | ExprKind::Ident(_) => {}
        ExprKind::Unary(_, inner) => collect(inner, strings, seen_strings, sigs, seen_sigs),
        ExprKind::Binary(_, lhs, rhs) => {
            collect(lhs, strings, seen_strings, sigs, seen_sigs);
            collect(rhs, strings, seen_strings, sigs, seen_sigs);
        }
        ExprKind::Call { args, .. } => {
            for a in args {
                collect(a, strings, seen_strings, sigs, seen_sigs);
            }
        }
        ExprKind::CallIndirect { callee, args, sig } => {
            collect(callee, strings, seen_strings, sigs, seen_sigs);
            for a in args {
                collect(a, strings, seen_strings, sigs, seen_sigs);
            }
            let key = sig_key(&sig.params, &sig.result);
            if seen_sigs.insert(key) {
                sigs.push(sig.clone());
            }
        }
        ExprKind::Let { value, body, .. } => {
            collect(value, strings, seen_strings, sigs, seen_sigs);
            collect(body, strings, seen_strings, sigs, seen_sigs);
        }
        ExprKind::Assign { value, .. } => collect(value, strings, seen_strings, sigs, seen_sigs),
        ExprKind::Block(stmts) => {
            for s in stmts {
                collect(s, strings, seen_strings, sigs, seen_sigs);
            }
        }
        ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            collect(cond, strings, seen_strings, sigs, seen_sigs);
            collect(then_branch, strings, seen_strings, sigs, seen_sigs);
            collect(else_branch, strings, seen_strings, sigs, seen_sigs);
        }
        ExprKind::Match { scrutinee, arms } => {
            collect(scrutinee, strings, seen_strings, sigs, seen_sigs);
            for arm in arms {
                if let Some(guard) = &arm.guard {
                    collect(guard, strings, seen_strings, sigs, seen_sigs);
                }
                collect(&arm.body, strings, seen_strings, sigs, seen_sigs);
            }
        }
        ExprKind::ListLit(elems) => {
            for e in elems {
                collect(e, strings, seen_strings, sigs, seen_sigs);
            }
        }
        ExprKind::RecordLit(fields) => {
            for (_, v) in fields {
                collect(v, strings, seen_strings, sigs, seen_sigs);
            }
        }
        ExprKind::FieldAccess { base, .. } => collect(base, strings, seen_strings, sigs, seen_sigs),
        ExprKind::UnionCtor { fields, .. } => {
            for f in fields {
                collect(f, strings, seen_strings, sigs, seen_sigs);
            }
        }
    }
}
