use crate::heap::{OptionResultShape, HEADER_LEN};
use crate::types::{SourceType, Variant};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("union has no variants")]
    EmptyUnion,
}

/// Byte offset and type of one field within a record or union-variant
/// payload, in declaration order (§4.1: "fields in declaration order").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOffset {
    pub name: String,
    pub offset: u32,
    pub ty: SourceType,
}

/// The fixed byte layout of a heap object: its total size and, for
/// records and union payloads, the offset of each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub size: u32,
    pub fields: Vec<FieldOffset>,
}

/// Computes field offsets for a record, laying fields out in declaration
/// order at each field's natural width with no inter-field padding —
/// records are not read by any FFI other than the generator and runtime
/// this crate describes, so packed layout is sufficient and keeps sizes
/// predictable for the allocator's size-class rounding.
pub fn layout_of(fields: &[(String, SourceType)]) -> Layout {
    let mut offset = 0u32;
    let mut out = Vec::with_capacity(fields.len());
    for (name, ty) in fields {
        out.push(FieldOffset {
            name: name.clone(),
            offset,
            ty: ty.clone(),
        });
        offset += ty.natural_width();
    }
    Layout {
        size: offset,
        fields: out,
    }
}

/// Width of a tagged union's payload: the widest variant's largest field
/// packed from offset 0, per §3 ("payload sized by the widest variant's
/// largest field"). A variant's own fields are laid out contiguously
/// within that shared payload area in declaration order; callers index a
/// matched variant's fields via `layout_of(&variant.fields_with_names())`.
pub fn union_payload_width(variants: &[Variant]) -> Result<u32, LayoutError> {
    if variants.is_empty() {
        return Err(LayoutError::EmptyUnion);
    }
    Ok(variants
        .iter()
        .map(|v| v.fields.iter().map(SourceType::natural_width).sum::<u32>())
        .max()
        .unwrap_or(0))
}

/// Total heap size of a tagged-union object: the `i32` tag word plus the
/// widest variant's payload.
pub fn union_object_size(variants: &[Variant]) -> Result<u32, LayoutError> {
    Ok(HEADER_LEN + union_payload_width(variants)?)
}

/// Offsets of one variant's own fields within the shared payload area,
/// packed from the payload's base (i.e. from byte 4 of the union object).
pub fn variant_field_offsets(variant: &Variant) -> Vec<FieldOffset> {
    let mut offset = HEADER_LEN;
    variant
        .fields
        .iter()
        .enumerate()
        .map(|(i, ty)| {
            let field = FieldOffset {
                name: format!("_{i}"),
                offset,
                ty: ty.clone(),
            };
            offset += ty.natural_width();
            field
        })
        .collect()
}

/// The Option/Result shape (§3) for a given Ok/Some payload type.
pub fn option_result_shape(payload: &SourceType) -> OptionResultShape {
    OptionResultShape::for_payload_width(payload.natural_width())
}
