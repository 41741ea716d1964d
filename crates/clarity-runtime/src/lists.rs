use wasmtime::Caller;

use clarity_abi::HEADER_LEN;
use clarity_alloc::{Allocator, LinearMemory};

use crate::error::RuntimeResult;
use crate::memory::CallerMemory;
use crate::state::HostState;

/// Element width in bytes for the two list flavors the ABI distinguishes
/// (§3: "S is 8 for i64/f64, 4 for i32/pointer").
const WIDTH_I32: u32 = 4;
const WIDTH_I64: u32 = 8;

fn with_mem<T>(
    caller: &mut Caller<'_, HostState>,
    f: impl FnOnce(&mut CallerMemory<'_, '_>, &mut Allocator) -> RuntimeResult<T>,
) -> RuntimeResult<T> {
    let state = caller.data_mut() as *mut HostState;
    // SAFETY: see `strings::with_mem` — disjoint borrows of the memory
    // export and the allocator field, both scoped to this call.
    let alloc = unsafe { &mut (*state).allocator };
    let mut mem = CallerMemory::new(caller);
    f(&mut mem, alloc)
}

fn read_count(mem: &impl LinearMemory, ptr: u32) -> RuntimeResult<u32> {
    if ptr == 0 {
        return Ok(0);
    }
    Ok(mem.read_u32(ptr)?)
}

fn read_elems_i32(mem: &impl LinearMemory, ptr: u32) -> RuntimeResult<Vec<i32>> {
    let count = read_count(mem, ptr)?;
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count {
        out.push(mem.read_u32(ptr + HEADER_LEN + i * WIDTH_I32)? as i32);
    }
    Ok(out)
}

fn read_elems_i64(mem: &impl LinearMemory, ptr: u32) -> RuntimeResult<Vec<i64>> {
    let count = read_count(mem, ptr)?;
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count {
        out.push(mem.read_i64(ptr + HEADER_LEN + i * WIDTH_I64)?);
    }
    Ok(out)
}

pub(crate) fn alloc_list_i32(
    alloc: &mut Allocator,
    mem: &mut impl LinearMemory,
    elems: &[i32],
) -> RuntimeResult<u32> {
    let ptr = alloc.alloc(HEADER_LEN + elems.len() as u32 * WIDTH_I32, mem)?;
    mem.write_u32(ptr, elems.len() as u32)?;
    for (i, &e) in elems.iter().enumerate() {
        mem.write_u32(ptr + HEADER_LEN + i as u32 * WIDTH_I32, e as u32)?;
    }
    Ok(ptr)
}

pub(crate) fn alloc_list_i64(
    alloc: &mut Allocator,
    mem: &mut impl LinearMemory,
    elems: &[i64],
) -> RuntimeResult<u32> {
    let ptr = alloc.alloc(HEADER_LEN + elems.len() as u32 * WIDTH_I64, mem)?;
    mem.write_u32(ptr, elems.len() as u32)?;
    for (i, &e) in elems.iter().enumerate() {
        mem.write_i64(ptr + HEADER_LEN + i as u32 * WIDTH_I64, e)?;
    }
    Ok(ptr)
}

pub(crate) fn length(caller: &mut Caller<'_, HostState>, ptr: u32) -> RuntimeResult<i64> {
    with_mem(caller, |mem, _| Ok(read_count(mem, ptr)? as i64))
}

pub(crate) fn get_i32(caller: &mut Caller<'_, HostState>, ptr: u32, idx: i64) -> RuntimeResult<i32> {
    with_mem(caller, |mem, _| {
        if idx < 0 || idx as u32 >= read_count(mem, ptr)? {
            return Ok(0);
        }
        Ok(mem.read_u32(ptr + HEADER_LEN + idx as u32 * WIDTH_I32)? as i32)
    })
}

pub(crate) fn get_i64(caller: &mut Caller<'_, HostState>, ptr: u32, idx: i64) -> RuntimeResult<i64> {
    with_mem(caller, |mem, _| {
        if idx < 0 || idx as u32 >= read_count(mem, ptr)? {
            return Ok(0);
        }
        mem.read_i64(ptr + HEADER_LEN + idx as u32 * WIDTH_I64).map_err(Into::into)
    })
}

pub(crate) fn head_i32(caller: &mut Caller<'_, HostState>, ptr: u32) -> RuntimeResult<i32> {
    get_i32(caller, ptr, 0)
}

pub(crate) fn head_i64(caller: &mut Caller<'_, HostState>, ptr: u32) -> RuntimeResult<i64> {
    get_i64(caller, ptr, 0)
}

/// `list_tail`/`list_reverse` carry no element-size argument in the ABI
/// table (unlike `list_concat`, which takes one explicitly), so the width
/// a given pointer was built with has to be recovered from the
/// allocator's own bookkeeping: the size class the block was allocated
/// under. For a list of `count` elements at width `w`, the block size is
/// `HEADER_LEN + count * w`, rounded up to the next power of two (with an
/// 8-byte floor) by the allocator. Trying both candidate widths against
/// the recorded size class resolves the ambiguity in all but a small
/// number of colliding (count, size-class) pairs, where i32 is preferred
/// as the more common flavor.
fn round_up_size_class(requested: u32) -> u32 {
    requested.max(clarity_abi::MIN_SIZE_CLASS_BYTES).next_power_of_two()
}

fn infer_width(alloc: &Allocator, ptr: u32, count: u32) -> u32 {
    let Some(size_class) = alloc.allocated_size(ptr) else {
        return WIDTH_I32;
    };
    let candidate_i32 = round_up_size_class(HEADER_LEN + count * WIDTH_I32);
    let candidate_i64 = round_up_size_class(HEADER_LEN + count * WIDTH_I64);
    if candidate_i32 == size_class {
        WIDTH_I32
    } else if candidate_i64 == size_class {
        WIDTH_I64
    } else {
        WIDTH_I32
    }
}

/// Drops the first element (§4.4: "shrinks by one from the front; empty
/// tail of an empty list is an empty list").
pub(crate) fn tail(caller: &mut Caller<'_, HostState>, ptr: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let count = read_count(mem, ptr)?;
        if count == 0 {
            return alloc_list_i32(alloc, mem, &[]);
        }
        let width = infer_width(alloc, ptr, count);
        let new_count = count - 1;
        let bytes = mem.read(ptr + HEADER_LEN + width, new_count * width)?.to_vec();
        let new_ptr = alloc.alloc(HEADER_LEN + new_count * width, mem)?;
        mem.write_u32(new_ptr, new_count)?;
        mem.write(new_ptr + HEADER_LEN, &bytes)?;
        Ok(new_ptr)
    })
}

pub(crate) fn append_i32(caller: &mut Caller<'_, HostState>, ptr: u32, value: i32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let mut elems = read_elems_i32(mem, ptr)?;
        elems.push(value);
        alloc_list_i32(alloc, mem, &elems)
    })
}

pub(crate) fn append_i64(caller: &mut Caller<'_, HostState>, ptr: u32, value: i64) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let mut elems = read_elems_i64(mem, ptr)?;
        elems.push(value);
        alloc_list_i64(alloc, mem, &elems)
    })
}

pub(crate) fn set_i32(
    caller: &mut Caller<'_, HostState>,
    ptr: u32,
    idx: i64,
    value: i32,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let mut elems = read_elems_i32(mem, ptr)?;
        if idx >= 0 && (idx as usize) < elems.len() {
            elems[idx as usize] = value;
        }
        alloc_list_i32(alloc, mem, &elems)
    })
}

pub(crate) fn set_i64(
    caller: &mut Caller<'_, HostState>,
    ptr: u32,
    idx: i64,
    value: i64,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let mut elems = read_elems_i64(mem, ptr)?;
        if idx >= 0 && (idx as usize) < elems.len() {
            elems[idx as usize] = value;
        }
        alloc_list_i64(alloc, mem, &elems)
    })
}

/// Concatenates two lists of the same element size (§4.4: "concat with
/// explicit element size").
pub(crate) fn concat(
    caller: &mut Caller<'_, HostState>,
    a: u32,
    b: u32,
    elem_size: i64,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let width = elem_size.max(WIDTH_I32 as i64) as u32;
        let count_a = read_count(mem, a)?;
        let count_b = read_count(mem, b)?;
        let total = count_a + count_b;
        let new_ptr = alloc.alloc(HEADER_LEN + total * width, mem)?;
        mem.write_u32(new_ptr, total)?;
        if count_a > 0 {
            let bytes_a = mem.read(a + HEADER_LEN, count_a * width)?.to_vec();
            mem.write(new_ptr + HEADER_LEN, &bytes_a)?;
        }
        if count_b > 0 {
            let bytes_b = mem.read(b + HEADER_LEN, count_b * width)?.to_vec();
            mem.write(new_ptr + HEADER_LEN + count_a * width, &bytes_b)?;
        }
        Ok(new_ptr)
    })
}

pub(crate) fn reverse(caller: &mut Caller<'_, HostState>, ptr: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let count = read_count(mem, ptr)?;
        let width = infer_width(alloc, ptr, count);
        let mut bytes = mem.read(ptr + HEADER_LEN, count * width)?.to_vec();
        let mut reversed = vec![0u8; bytes.len()];
        for i in 0..count as usize {
            let src = &bytes[i * width as usize..(i + 1) * width as usize];
            let dst_start = (count as usize - 1 - i) * width as usize;
            reversed[dst_start..dst_start + width as usize].copy_from_slice(src);
        }
        std::mem::swap(&mut bytes, &mut reversed);
        let new_ptr = alloc.alloc(HEADER_LEN + count * width, mem)?;
        mem.write_u32(new_ptr, count)?;
        mem.write(new_ptr + HEADER_LEN, &bytes)?;
        Ok(new_ptr)
    })
}
