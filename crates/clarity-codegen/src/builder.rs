use clarity_abi::{FieldOffset, SourceType, HEADER_LEN};
use clarity_ir::{BinOp, Expr, ExprKind, UnOp};
use wasm_encoder::{BlockType, Function, Instruction, MemArg, ValType};

use crate::ctx::{val_type_of, ModuleCtx};
use crate::error::{CodegenError, CodegenResult};
use crate::env::FunctionEnv;

const MEM: u32 = 0;

fn mem_arg(offset: u32) -> MemArg {
    MemArg {
        offset: offset as u64,
        align: 2,
        memory_index: MEM,
    }
}

fn load_instruction(ty: &SourceType, offset: u32) -> Instruction<'static> {
    match ty.to_wasm_type() {
        clarity_abi::WasmType::I64 => Instruction::I64Load(mem_arg(offset)),
        clarity_abi::WasmType::F64 => Instruction::F64Load(mem_arg(offset)),
        clarity_abi::WasmType::I32 => Instruction::I32Load(mem_arg(offset)),
        clarity_abi::WasmType::None => unreachable!("Unit has no heap representation to load"),
    }
}

fn store_instruction(ty: &SourceType, offset: u32) -> Instruction<'static> {
    match ty.to_wasm_type() {
        clarity_abi::WasmType::I64 => Instruction::I64Store(mem_arg(offset)),
        clarity_abi::WasmType::F64 => Instruction::F64Store(mem_arg(offset)),
        clarity_abi::WasmType::I32 => Instruction::I32Store(mem_arg(offset)),
        clarity_abi::WasmType::None => unreachable!("Unit has no heap representation to store"),
    }
}

/// Lowers one function body by structural recursion over `clarity_ir::Expr`
/// (§4.3). Owns the per-function environment, the in-progress instruction
/// stream, and the bookkeeping the tail-call rewrite needs: how many
/// structured control constructs are currently open between the
/// instruction being emitted and the function-wrapping `loop` (so a
/// tail call can `br` out to exactly the right depth).
pub struct FunctionBuilder<'m> {
    pub(crate) env: FunctionEnv,
    instrs: Vec<Instruction<'static>>,
    ctx: &'m ModuleCtx,
    fn_name: String,
    fn_result: SourceType,
    is_self_recursive: bool,
    nesting_since_loop: u32,
}

impl<'m> FunctionBuilder<'m> {
    pub fn new(ctx: &'m ModuleCtx, fn_name: String, fn_result: SourceType) -> Self {
        FunctionBuilder {
            env: FunctionEnv::new(),
            instrs: Vec::new(),
            ctx,
            fn_name,
            fn_result,
            is_self_recursive: false,
            nesting_since_loop: 0,
        }
    }

    fn emit(&mut self, inst: Instruction<'static>) {
        self.instrs.push(inst);
    }

    /// Lowers the whole function body. If the body contains a
    /// self-tail-recursive call anywhere in tail position, the body is
    /// wrapped in a `loop` and such calls are rewritten into a parameter
    /// rebind plus a branch back to its start (§4.3 "Tail-call
    /// optimization"), which is mandatory: the generator does not lower
    /// unbounded stack growth for self-recursion.
    pub fn lower_body(mut self, body: &Expr) -> CodegenResult<Function> {
        self.is_self_recursive = contains_self_tail_call(body, &self.fn_name);
        let block_ty = self.block_type_for(&self.fn_result.clone());

        if self.is_self_recursive {
            self.emit(Instruction::Loop(block_ty));
            self.nesting_since_loop = 0;
            self.lower_expr(body, true)?;
            self.emit(Instruction::End);
        } else {
            self.lower_expr(body, true)?;
        }

        if matches!(self.fn_result, SourceType::Unit) {
            // A Unit-returning function's body may still leave a value on
            // the stack if its terminal expression has non-Unit type in
            // source but is discarded by the checker; belt-and-braces
            // drop here matches §4.1 ("its body ends with a drop of any
            // final value").
        }

        let mut locals: Vec<(u32, ValType)> = Vec::new();
        for vt in self.env.extra_locals() {
            locals.push((1, *vt));
        }
        let mut func = Function::new(locals);
        for inst in &self.instrs {
            func.instruction(inst);
        }
        func.instruction(&Instruction::End);
        Ok(func)
    }

    fn block_type_for(&self, ty: &SourceType) -> BlockType {
        match val_type_of(ty) {
            Some(vt) => BlockType::Result(vt),
            None => BlockType::Empty,
        }
    }

    pub(crate) fn block_type_for_pub(&self, ty: &SourceType) -> BlockType {
        self.block_type_for(ty)
    }

    /// `tail` marks whether `expr` is in terminal position of the
    /// enclosing function body, unwrapped through blocks, if-arms, and
    /// match-arms (§4.3) — the only position a self-recursive call can be
    /// rewritten from.
    pub(crate) fn lower_expr(&mut self, expr: &Expr, tail: bool) -> CodegenResult<()> {
        match &expr.kind {
            ExprKind::IntLit(n) => self.emit(Instruction::I64Const(*n)),
            ExprKind::FloatLit(f) => self.emit(Instruction::F64Const((*f).into())),
            ExprKind::BoolLit(b) => self.emit(Instruction::I32Const(*b as i32)),
            ExprKind::StringLit(s) => {
                let offset = *self
                    .ctx
                    .string_offsets
                    .get(s)
                    .expect("every string literal is materialized by module.rs before lowering");
                self.emit(Instruction::I32Const(offset as i32));
            }
            ExprKind::Ident(name) => {
                let slot = self.env.lookup(name)?;
                self.emit(Instruction::LocalGet(slot.index));
            }
            ExprKind::Unary(op, inner) => self.lower_unary(*op, inner)?,
            ExprKind::Binary(op, lhs, rhs) => self.lower_binary(*op, lhs, rhs)?,
            ExprKind::Call { callee, args } => {
                self.lower_call(callee, args, &expr.ty, tail)?;
            }
            ExprKind::CallIndirect { callee, args, sig } => {
                for a in args {
                    self.lower_expr(a, false)?;
                }
                self.lower_expr(callee, false)?;
                let type_index = self.ctx.call_indirect_type_index(sig);
                self.emit(Instruction::CallIndirect {
                    type_index,
                    table_index: 0,
                });
            }
            ExprKind::Let {
                name,
                mutable,
                value,
                body,
            } => {
                self.lower_expr(value, false)?;
                if val_type_of(&value.ty).is_some() {
                    let index = self.env.declare_local(name, &value.ty, *mutable)?;
                    self.emit(Instruction::LocalSet(index));
                } else {
                    self.env.declare_local(name, &value.ty, *mutable)?;
                }
                self.lower_expr(body, tail)?;
            }
            ExprKind::Assign { name, value } => {
                let slot = self.env.lookup(name)?.clone();
                if !slot.mutable {
                    return Err(CodegenError::AssignToImmutable(name.clone()));
                }
                self.lower_expr(value, false)?;
                self.emit(Instruction::LocalSet(slot.index));
            }
            ExprKind::Block(stmts) => self.lower_block(stmts, tail)?,
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => self.lower_if(cond, then_branch, else_branch, &expr.ty, tail)?,
            ExprKind::Match { scrutinee, arms } => {
                self.lower_match(scrutinee, arms, &expr.ty, tail)?
            }
            ExprKind::ListLit(elems) => self.lower_list_lit(elems)?,
            ExprKind::RecordLit(fields) => self.lower_record_lit(fields, &expr.ty)?,
            ExprKind::FieldAccess { base, field } => self.lower_field_access(base, field)?,
            ExprKind::UnionCtor { tag, fields } => self.lower_union_ctor(*tag, fields, &expr.ty)?,
        }
        Ok(())
    }

    fn lower_block(&mut self, stmts: &[Expr], tail: bool) -> CodegenResult<()> {
        let Some((last, init)) = stmts.split_last() else {
            return Ok(());
        };
        for stmt in init {
            self.lower_expr(stmt, false)?;
            if !matches!(stmt.ty, SourceType::Unit) {
                self.emit(Instruction::Drop);
            }
        }
        self.lower_expr(last, tail)
    }

    fn lower_if(
        &mut self,
        cond: &Expr,
        then_branch: &Expr,
        else_branch: &Expr,
        result_ty: &SourceType,
        tail: bool,
    ) -> CodegenResult<()> {
        self.lower_expr(cond, false)?;
        self.emit(Instruction::If(self.block_type_for(result_ty)));
        self.nesting_since_loop += 1;
        self.lower_expr(then_branch, tail)?;
        self.emit(Instruction::Else);
        self.lower_expr(else_branch, tail)?;
        self.nesting_since_loop -= 1;
        self.emit(Instruction::End);
        Ok(())
    }

    fn lower_unary(&mut self, op: UnOp, inner: &Expr) -> CodegenResult<()> {
        match (op, inner.ty.to_wasm_type()) {
            (UnOp::Neg, clarity_abi::WasmType::I64) => {
                self.emit(Instruction::I64Const(0));
                self.lower_expr(inner, false)?;
                self.emit(Instruction::I64Sub);
            }
            (UnOp::Neg, clarity_abi::WasmType::F64) => {
                self.lower_expr(inner, false)?;
                self.emit(Instruction::F64Neg);
            }
            (UnOp::Not, _) => {
                self.lower_expr(inner, false)?;
                self.emit(Instruction::I32Const(1));
                self.emit(Instruction::I32Xor);
            }
            _ => {
                return Err(CodegenError::UnsupportedExpr(format!(
                    "unary {op:?} over {:?}",
                    inner.ty
                )))
            }
        }
        Ok(())
    }

    fn lower_binary(&mut self, op: BinOp, lhs: &Expr, rhs: &Expr) -> CodegenResult<()> {
        if matches!(op, BinOp::Concat) {
            self.lower_expr(lhs, false)?;
            self.lower_expr(rhs, false)?;
            self.emit_host_call("string_concat");
            return Ok(());
        }
        if matches!(lhs.ty, SourceType::String) && matches!(op, BinOp::Eq | BinOp::Ne) {
            self.lower_expr(lhs, false)?;
            self.lower_expr(rhs, false)?;
            self.emit_host_call("string_eq");
            if matches!(op, BinOp::Ne) {
                self.emit(Instruction::I32Eqz);
            }
            return Ok(());
        }
        if matches!(lhs.ty, SourceType::Float64) && matches!(op, BinOp::Rem) {
            self.lower_expr(lhs, false)?;
            self.lower_expr(rhs, false)?;
            self.emit_host_call("float_rem");
            return Ok(());
        }

        self.lower_expr(lhs, false)?;
        self.lower_expr(rhs, false)?;
        let inst = match (lhs.ty.to_wasm_type(), op) {
            (clarity_abi::WasmType::I64, BinOp::Add) => Instruction::I64Add,
            (clarity_abi::WasmType::I64, BinOp::Sub) => Instruction::I64Sub,
            (clarity_abi::WasmType::I64, BinOp::Mul) => Instruction::I64Mul,
            (clarity_abi::WasmType::I64, BinOp::Div) => Instruction::I64DivS,
            (clarity_abi::WasmType::I64, BinOp::Rem) => Instruction::I64RemS,
            (clarity_abi::WasmType::I64, BinOp::Eq) => Instruction::I64Eq,
            (clarity_abi::WasmType::I64, BinOp::Ne) => Instruction::I64Ne,
            (clarity_abi::WasmType::I64, BinOp::Lt) => Instruction::I64LtS,
            (clarity_abi::WasmType::I64, BinOp::Le) => Instruction::I64LeS,
            (clarity_abi::WasmType::I64, BinOp::Gt) => Instruction::I64GtS,
            (clarity_abi::WasmType::I64, BinOp::Ge) => Instruction::I64GeS,

            (clarity_abi::WasmType::F64, BinOp::Add) => Instruction::F64Add,
            (clarity_abi::WasmType::F64, BinOp::Sub) => Instruction::F64Sub,
            (clarity_abi::WasmType::F64, BinOp::Mul) => Instruction::F64Mul,
            (clarity_abi::WasmType::F64, BinOp::Div) => Instruction::F64Div,
            (clarity_abi::WasmType::F64, BinOp::Eq) => Instruction::F64Eq,
            (clarity_abi::WasmType::F64, BinOp::Ne) => Instruction::F64Ne,
            (clarity_abi::WasmType::F64, BinOp::Lt) => Instruction::F64Lt,
            (clarity_abi::WasmType::F64, BinOp::Le) => Instruction::F64Le,
            (clarity_abi::WasmType::F64, BinOp::Gt) => Instruction::F64Gt,
            (clarity_abi::WasmType::F64, BinOp::Ge) => Instruction::F64Ge,

            (clarity_abi::WasmType::I32, BinOp::And) => Instruction::I32And,
            (clarity_abi::WasmType::I32, BinOp::Or) => Instruction::I32Or,
            (clarity_abi::WasmType::I32, BinOp::Eq) => Instruction::I32Eq,
            (clarity_abi::WasmType::I32, BinOp::Ne) => Instruction::I32Ne,

            _ => {
                return Err(CodegenError::UnsupportedExpr(format!(
                    "binary {op:?} over {:?}",
                    lhs.ty
                )))
            }
        };
        self.emit(inst);
        Ok(())
    }

    fn emit_host_call(&mut self, name: &str) {
        let index = self
            .ctx
            .host_import_call_index(name)
            .unwrap_or_else(|| panic!("missing host import `{name}` in the fixed contract table"));
        self.emit(Instruction::Call(index));
    }

    /// A direct call, either to another top-level function or to a host
    /// import resolved by name (§4.3 "Calls"). When `callee` names the
    /// current function and `tail` holds, this is rewritten per the
    /// mandatory tail-call optimization instead of emitting a `call`.
    fn lower_call(
        &mut self,
        callee: &str,
        args: &[Expr],
        _result_ty: &SourceType,
        tail: bool,
    ) -> CodegenResult<()> {
        if tail && callee == self.fn_name && self.is_self_recursive {
            return self.lower_tail_self_call(args);
        }

        for a in args {
            self.lower_expr(a, false)?;
        }
        if let Some(info) = self.ctx.functions.get(callee) {
            self.emit(Instruction::Call(info.index));
        } else if let Some(index) = self.ctx.host_import_call_index(callee) {
            self.emit(Instruction::Call(index));
        } else {
            return Err(CodegenError::UnknownCallee(callee.to_string()));
        }
        Ok(())
    }

    /// Evaluates the new arguments into scratch locals, copies them into
    /// the parameter slots, then branches to the function-wrapping
    /// `loop` (§4.3). Evaluating into scratch locals first (rather than
    /// writing straight into parameter slots) is required whenever one
    /// argument expression reads a parameter another argument is about
    /// to overwrite.
    fn lower_tail_self_call(&mut self, args: &[Expr]) -> CodegenResult<()> {
        let param_indices = self.env.param_indices.clone();
        let mut scratches = Vec::with_capacity(args.len());
        for arg in args {
            self.lower_expr(arg, false)?;
            let scratch = self.env.declare_scratch(&arg.ty);
            self.emit(Instruction::LocalSet(scratch));
            scratches.push(scratch);
        }
        for (param_index, scratch) in param_indices.iter().zip(scratches.iter()) {
            self.emit(Instruction::LocalGet(*scratch));
            self.emit(Instruction::LocalSet(*param_index));
        }
        self.emit(Instruction::Br(self.nesting_since_loop));
        Ok(())
    }

    fn lower_list_lit(&mut self, elems: &[Expr]) -> CodegenResult<()> {
        let elem_ty = elems
            .first()
            .map(|e| e.ty.clone())
            .unwrap_or(SourceType::Int64);
        let width = elem_ty.natural_width().max(4);
        let size = HEADER_LEN + elems.len() as u32 * width;
        let ptr = self.alloc(size)?;
        self.emit(Instruction::LocalGet(ptr));
        self.emit(Instruction::I32Const(elems.len() as i32));
        self.emit(Instruction::I32Store(mem_arg(0)));
        for (i, elem) in elems.iter().enumerate() {
            self.emit(Instruction::LocalGet(ptr));
            self.lower_expr(elem, false)?;
            self.emit(store_instruction(&elem_ty, HEADER_LEN + i as u32 * width));
        }
        self.emit(Instruction::LocalGet(ptr));
        Ok(())
    }

    fn lower_record_lit(&mut self, fields: &[(String, Expr)], ty: &SourceType) -> CodegenResult<()> {
        let SourceType::Record(decl_fields) = ty else {
            return Err(CodegenError::UnsupportedExpr(
                "record literal without a Record type".into(),
            ));
        };
        let layout = clarity_abi::layout_of(decl_fields);
        let ptr = self.alloc(layout.size)?;
        for (name, value) in fields {
            let field = layout
                .fields
                .iter()
                .find(|f| &f.name == name)
                .ok_or_else(|| CodegenError::UnknownField {
                    field: name.clone(),
                })?
                .clone();
            self.store_field(ptr, &field, value)?;
        }
        self.emit(Instruction::LocalGet(ptr));
        Ok(())
    }

    fn lower_union_ctor(&mut self, tag: u32, fields: &[Expr], ty: &SourceType) -> CodegenResult<()> {
        let SourceType::Union(variants) = ty else {
            return Err(CodegenError::UnsupportedExpr(
                "union constructor without a Union type".into(),
            ));
        };
        let size = clarity_abi::union_payload_width(variants)
            .map(|w| HEADER_LEN + w)
            .map_err(CodegenError::from)?;
        let variant = variants
            .iter()
            .find(|v| v.tag == tag)
            .ok_or_else(|| CodegenError::UnknownField {
                field: format!("variant with tag {tag}"),
            })?;
        let offsets = clarity_abi::variant_field_offsets(variant);

        let ptr = self.alloc(size)?;
        self.emit(Instruction::LocalGet(ptr));
        self.emit(Instruction::I32Const(tag as i32));
        self.emit(Instruction::I32Store(mem_arg(0)));
        for (field, value) in offsets.iter().zip(fields.iter()) {
            self.store_field(ptr, field, value)?;
        }
        self.emit(Instruction::LocalGet(ptr));
        Ok(())
    }

    fn store_field(&mut self, ptr: u32, field: &FieldOffset, value: &Expr) -> CodegenResult<()> {
        self.emit(Instruction::LocalGet(ptr));
        self.lower_expr(value, false)?;
        self.emit(store_instruction(&field.ty, field.offset));
        Ok(())
    }

    fn lower_field_access(&mut self, base: &Expr, field: &str) -> CodegenResult<()> {
        let SourceType::Record(decl_fields) = &base.ty else {
            return Err(CodegenError::UnsupportedExpr(
                "field access on a non-record type".into(),
            ));
        };
        let layout = clarity_abi::layout_of(decl_fields);
        let f = layout
            .fields
            .iter()
            .find(|f| f.name == field)
            .ok_or_else(|| CodegenError::UnknownField {
                field: field.to_string(),
            })?
            .clone();
        self.lower_expr(base, false)?;
        self.emit(load_instruction(&f.ty, f.offset));
        Ok(())
    }

    /// Allocates `size` bytes via the host's `host_alloc` import and binds
    /// the resulting pointer to a fresh scratch local so it can be
    /// referenced multiple times while fields are written (§4.1:
    /// "allocating a block of the fixed size... and writing the tag...
    /// and field values").
    pub(crate) fn alloc(&mut self, size: u32) -> CodegenResult<u32> {
        self.emit(Instruction::I64Const(size as i64));
        self.emit_host_call("host_alloc");
        let ptr = self.env.declare_scratch(&SourceType::String);
        self.emit(Instruction::LocalSet(ptr));
        Ok(ptr)
    }

    pub(crate) fn declare_scratch(&mut self, ty: &SourceType) -> u32 {
        self.env.declare_scratch(ty)
    }

    pub(crate) fn emit_raw(&mut self, inst: Instruction<'static>) {
        self.emit(inst);
    }

    pub(crate) fn nesting_since_loop(&self) -> u32 {
        self.nesting_since_loop
    }

    pub(crate) fn enter_nesting(&mut self) {
        self.nesting_since_loop += 1;
    }

    pub(crate) fn exit_nesting(&mut self) {
        self.nesting_since_loop -= 1;
    }

    pub(crate) fn module_ctx(&self) -> &'m ModuleCtx {
        self.ctx
    }

    pub(crate) fn env_mut(&mut self) -> &mut FunctionEnv {
        &mut self.env
    }
}

/// Does `body` contain a call to `fn_name` reachable in tail position
/// (unwrapped through blocks, if-arms, and match-arms, per §4.3)? Used to
/// decide whether a function's body needs the `loop`-wrapping rewrite at
/// all — functions with no such call lower exactly as written.
fn contains_self_tail_call(body: &Expr, fn_name: &str) -> bool {
    match &body.kind {
        ExprKind::Call { callee, .. } => callee == fn_name,
        ExprKind::Block(stmts) => stmts
            .last()
            .is_some_and(|last| contains_self_tail_call(last, fn_name)),
        ExprKind::If {
            then_branch,
            else_branch,
            ..
        } => {
            contains_self_tail_call(then_branch, fn_name)
                || contains_self_tail_call(else_branch, fn_name)
        }
        ExprKind::Match { arms, .. } => arms
            .iter()
            .any(|arm| contains_self_tail_call(&arm.body, fn_name)),
        ExprKind::Let { body, .. } => contains_self_tail_call(body, fn_name),
        _ => false,
    }
}
