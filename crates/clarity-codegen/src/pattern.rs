use clarity_abi::SourceType;
use clarity_ir::{Expr, MatchArm, Pattern};
use wasm_encoder::{Instruction, MemArg};

use crate::builder::FunctionBuilder;
use crate::error::{CodegenError, CodegenResult};

/// The scrutinee is bound once to a temporary local before any arm is
/// considered (§4.3: "the scrutinee is bound once to a temporary local").
/// For a tagged union, its tag is additionally loaded once into a second
/// temporary, since every arm in the chain needs it.
struct ScrutineeTemps {
    /// The scrutinee's own value: the bool/int value itself, or the
    /// union's pointer.
    value: u32,
    /// Set only when matching a tagged union.
    tag: Option<u32>,
}

impl<'m> FunctionBuilder<'m> {
    pub(crate) fn lower_match(
        &mut self,
        scrutinee: &Expr,
        arms: &[MatchArm],
        result_ty: &SourceType,
        tail: bool,
    ) -> CodegenResult<()> {
        self.lower_expr(scrutinee, false)?;
        let value = self.declare_scratch(&scrutinee.ty);
        self.emit_raw(Instruction::LocalSet(value));

        let tag = match &scrutinee.ty {
            SourceType::Union(_) => {
                let tag_local = self.declare_scratch(&SourceType::Bool);
                self.emit_raw(Instruction::LocalGet(value));
                self.emit_raw(Instruction::I32Load(MemArg {
                    offset: 0,
                    align: 2,
                    memory_index: 0,
                }));
                self.emit_raw(Instruction::LocalSet(tag_local));
                Some(tag_local)
            }
            SourceType::Bool | SourceType::Int64 | SourceType::Timestamp => None,
            other => {
                return Err(CodegenError::UnsupportedExpr(format!(
                    "match over unsupported scrutinee type {other:?}"
                )))
            }
        };
        let temps = ScrutineeTemps { value, tag };

        self.lower_arm_chain(&scrutinee.ty, &temps, arms, 0, result_ty, tail)
    }

    /// Arms compile last-to-first into a right-leaning if/else chain
    /// (§4.3); this function builds the equivalent nested structure by
    /// recursing forward through `arms`, which produces byte-identical
    /// control flow (arm 0's condition gates arm 0's body vs. "everything
    /// from arm 1 on", recursively) without needing two passes.
    fn lower_arm_chain(
        &mut self,
        scrutinee_ty: &SourceType,
        temps: &ScrutineeTemps,
        arms: &[MatchArm],
        i: usize,
        result_ty: &SourceType,
        tail: bool,
    ) -> CodegenResult<()> {
        let Some(arm) = arms.get(i) else {
            // The checker guarantees exhaustiveness; reaching past every
            // arm without a match is unreachable at run time.
            self.emit_raw(Instruction::Unreachable);
            return Ok(());
        };

        self.emit_structural_cond(&arm.pattern, scrutinee_ty, temps)?;
        let block_ty = self.block_type_for_pub(result_ty);
        self.emit_raw(Instruction::If(block_ty));
        self.enter_nesting();
        self.bind_pattern(&arm.pattern, scrutinee_ty, temps)?;

        match &arm.guard {
            Some(guard) => {
                // Guard evaluated with this arm's bindings in scope; a
                // failing guard falls through to the NEXT arm, not
                // straight to the wildcard (§4.3).
                self.lower_expr(guard, false)?;
                self.emit_raw(Instruction::If(block_ty));
                self.enter_nesting();
                self.lower_expr(&arm.body, tail)?;
                self.emit_raw(Instruction::Else);
                self.lower_arm_chain(scrutinee_ty, temps, arms, i + 1, result_ty, tail)?;
                self.exit_nesting();
                self.emit_raw(Instruction::End);
            }
            None => {
                self.lower_expr(&arm.body, tail)?;
            }
        }

        self.emit_raw(Instruction::Else);
        self.lower_arm_chain(scrutinee_ty, temps, arms, i + 1, result_ty, tail)?;
        self.exit_nesting();
        self.emit_raw(Instruction::End);
        Ok(())
    }

    fn emit_structural_cond(
        &mut self,
        pattern: &Pattern,
        scrutinee_ty: &SourceType,
        temps: &ScrutineeTemps,
    ) -> CodegenResult<()> {
        match pattern {
            Pattern::Wildcard | Pattern::Binding(_) => {
                self.emit_raw(Instruction::I32Const(1));
            }
            Pattern::BoolLit(b) => {
                self.emit_raw(Instruction::LocalGet(temps.value));
                self.emit_raw(Instruction::I32Const(*b as i32));
                self.emit_raw(Instruction::I32Eq);
            }
            Pattern::IntLit(n) => {
                self.emit_raw(Instruction::LocalGet(temps.value));
                self.emit_raw(Instruction::I64Const(*n));
                self.emit_raw(Instruction::I64Eq);
            }
            // Inclusive at both ends: `lo..hi` matches `lo <= n <= hi` (§4.3).
            Pattern::IntRange { lo, hi } => {
                self.emit_raw(Instruction::LocalGet(temps.value));
                self.emit_raw(Instruction::I64Const(*lo));
                self.emit_raw(Instruction::I64GeS);
                self.emit_raw(Instruction::LocalGet(temps.value));
                self.emit_raw(Instruction::I64Const(*hi));
                self.emit_raw(Instruction::I64LeS);
                self.emit_raw(Instruction::I32And);
            }
            Pattern::Variant { tag, .. } => {
                let tag_local = temps.tag.ok_or_else(|| {
                    CodegenError::UnsupportedExpr(
                        "variant pattern against a non-union scrutinee".into(),
                    )
                })?;
                self.emit_raw(Instruction::LocalGet(tag_local));
                self.emit_raw(Instruction::I32Const(*tag as i32));
                self.emit_raw(Instruction::I32Eq);
            }
        }
        let _ = scrutinee_ty;
        Ok(())
    }

    fn bind_pattern(
        &mut self,
        pattern: &Pattern,
        scrutinee_ty: &SourceType,
        temps: &ScrutineeTemps,
    ) -> CodegenResult<()> {
        match pattern {
            Pattern::Binding(name) => {
                let idx = self.env_mut().declare_local(name, scrutinee_ty, false)?;
                self.emit_raw(Instruction::LocalGet(temps.value));
                self.emit_raw(Instruction::LocalSet(idx));
            }
            Pattern::Variant { tag, field_bindings } => {
                let SourceType::Union(variants) = scrutinee_ty else {
                    return Err(CodegenError::UnsupportedExpr(
                        "variant pattern against a non-union scrutinee".into(),
                    ));
                };
                let variant = variants
                    .iter()
                    .find(|v| v.tag == *tag)
                    .ok_or_else(|| CodegenError::UnknownField {
                        field: format!("variant with tag {tag}"),
                    })?;
                let offsets = clarity_abi::variant_field_offsets(variant);
                for (field, binding) in offsets.iter().zip(field_bindings.iter()) {
                    let Some(name) = binding else { continue };
                    self.emit_raw(Instruction::LocalGet(temps.value));
                    self.emit_raw(load_at(&field.ty, field.offset));
                    let idx = self.env_mut().declare_local(name, &field.ty, false)?;
                    self.emit_raw(Instruction::LocalSet(idx));
                }
            }
            Pattern::Wildcard | Pattern::BoolLit(_) | Pattern::IntLit(_) | Pattern::IntRange { .. } => {}
        }
        Ok(())
    }
}

fn load_at(ty: &SourceType, offset: u32) -> Instruction<'static> {
    let mem_arg = MemArg {
        offset: offset as u64,
        align: 2,
        memory_index: 0,
    };
    match ty.to_wasm_type() {
        clarity_abi::WasmType::I64 => Instruction::I64Load(mem_arg),
        clarity_abi::WasmType::F64 => Instruction::F64Load(mem_arg),
        clarity_abi::WasmType::I32 => Instruction::I32Load(mem_arg),
        clarity_abi::WasmType::None => unreachable!("Unit field has no heap representation"),
    }
}
