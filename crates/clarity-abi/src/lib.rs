//! Value representation and heap layout rules for the Clarity ABI.
//!
//! This crate fixes how a resolved source-level type maps onto WASM
//! machine types and, for pointer-shaped types, onto the byte layout of
//! the object it points to in linear memory. It has no knowledge of
//! code generation or of the host runtime's allocator; both depend on
//! it for a single shared answer to "how wide is this, and how is it
//! shaped on the heap".

mod heap;
mod imports;
mod layout;
mod types;

pub use heap::{HeapTag, OptionResultShape, HEADER_LEN, MIN_SIZE_CLASS_BYTES, PTR_ALIGN};
pub use imports::{find as find_host_import, HostImport, HOST_IMPORTS};
pub use layout::{
    layout_of, option_result_shape, union_object_size, union_payload_width, variant_field_offsets,
    FieldOffset, Layout, LayoutError,
};
pub use types::{FnSig, SourceType, Variant, WasmType};
