use clarity_abi::heap::HEADER_LEN;
use clarity_alloc::{Allocator, LinearMemory};

use crate::error::RuntimeResult;

/// Reads a length-prefixed UTF-8 string object at `ptr` (§3: `u32 len ‖
/// utf8 bytes`). A null pointer reads as the empty string — guest code
/// never dereferences pointer 0 for a live value, but host primitives
/// that accept an optional string by pointer treat 0 as "absent".
pub(crate) fn read_string(mem: &impl LinearMemory, ptr: u32) -> RuntimeResult<String> {
    if ptr == 0 {
        return Ok(String::new());
    }
    let len = mem.read_u32(ptr)?;
    let bytes = mem.read(ptr + HEADER_LEN, len)?;
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

/// Interns `s` into the heap, returning its pointer (§4.2: string
/// allocation is always content-addressed through the intern table).
pub(crate) fn alloc_string(
    alloc: &mut Allocator,
    mem: &mut impl LinearMemory,
    s: &str,
) -> RuntimeResult<u32> {
    Ok(alloc.intern_string(s, mem)?)
}

/// Reads a length-prefixed raw byte object at `ptr` (§3: `u32 len ‖
/// bytes`, same header shape as String but without the UTF-8 contract).
pub(crate) fn read_bytes(mem: &impl LinearMemory, ptr: u32) -> RuntimeResult<Vec<u8>> {
    if ptr == 0 {
        return Ok(Vec::new());
    }
    let len = mem.read_u32(ptr)?;
    Ok(mem.read(ptr + HEADER_LEN, len)?.to_vec())
}

/// Allocates a fresh (uninterned) byte object. Bytes values are not
/// content-addressed the way strings are — §4.2 reserves interning for
/// the String type only.
pub(crate) fn alloc_bytes(
    alloc: &mut Allocator,
    mem: &mut impl LinearMemory,
    bytes: &[u8],
) -> RuntimeResult<u32> {
    let ptr = alloc.alloc(HEADER_LEN + bytes.len() as u32, mem)?;
    mem.write_u32(ptr, bytes.len() as u32)?;
    mem.write(ptr + HEADER_LEN, bytes)?;
    Ok(ptr)
}

/// Writes the narrow (8-byte) Option/Result encoding: `i32 tag ‖ i32
/// payload` (§3). Used for every payload whose natural width is 4 bytes
/// or less, including pointer-shaped payloads and `Unit`.
pub(crate) fn write_narrow_tagged(
    alloc: &mut Allocator,
    mem: &mut impl LinearMemory,
    tag: i32,
    payload: i32,
) -> RuntimeResult<u32> {
    let ptr = alloc.alloc(8, mem)?;
    mem.write_u32(ptr, tag as u32)?;
    mem.write_u32(ptr + 4, payload as u32)?;
    Ok(ptr)
}

/// Writes the wide (12-byte) Option/Result encoding: `i32 tag ‖ 8-byte
/// payload` (§3). Used for `Int64`/`Float64`/`Timestamp` payloads.
pub(crate) fn write_wide_tagged(
    alloc: &mut Allocator,
    mem: &mut impl LinearMemory,
    tag: i32,
    payload: i64,
) -> RuntimeResult<u32> {
    let ptr = alloc.alloc(12, mem)?;
    mem.write_u32(ptr, tag as u32)?;
    mem.write_i64(ptr + 4, payload)?;
    Ok(ptr)
}
