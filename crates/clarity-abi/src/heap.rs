/// Every heap pointer is 4-byte aligned (§3 invariants).
pub const PTR_ALIGN: u32 = 4;

/// The smallest size class the allocator ever hands out, even for
/// requests narrower than this (§4.2: "round up... with an 8-byte
/// minimum").
pub const MIN_SIZE_CLASS_BYTES: u32 = 8;

/// Length of the `u32` length/count prefix shared by String, Bytes, and
/// List headers (§3).
pub const HEADER_LEN: u32 = 4;

/// Discriminant values used by the two fixed Option/Result encodings in
/// §3. Generated code never needs symbolic names for these (it loads and
/// compares raw `i32`s), but the host runtime and the code generator's
/// pattern-match lowering share these constants to avoid re-deriving them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapTag {
    OptionSome = 0,
    OptionNone = 1,
    ResultOk = 0,
    ResultErr = 1,
}

/// The two physical shapes an `Option`/`Result` can take, per the table in
/// spec.md §3. Selection depends only on whether the payload's natural
/// width is 4 or 8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionResultShape {
    /// `i32 tag ‖ i32 payload` — 8 bytes total.
    Narrow,
    /// `i32 tag ‖ 8-byte payload` — 12 bytes total.
    Wide,
}

impl OptionResultShape {
    pub fn for_payload_width(payload_width: u32) -> Self {
        if payload_width > 4 {
            OptionResultShape::Wide
        } else {
            OptionResultShape::Narrow
        }
    }

    pub fn total_size(self) -> u32 {
        match self {
            OptionResultShape::Narrow => 8,
            OptionResultShape::Wide => 12,
        }
    }

    /// Byte offset of the payload relative to the object's base pointer.
    /// Identical for both shapes: the tag always occupies the first word.
    pub fn payload_offset(self) -> u32 {
        4
    }
}
