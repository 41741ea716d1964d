use regex::Regex;
use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::heap::{alloc_string, read_string, write_narrow_tagged};
use crate::lists::alloc_list_i32;
use crate::memory::CallerMemory;
use crate::state::HostState;

fn with_mem<T>(
    caller: &mut Caller<'_, HostState>,
    f: impl FnOnce(&mut CallerMemory<'_, '_>, &mut clarity_alloc::Allocator) -> RuntimeResult<T>,
) -> RuntimeResult<T> {
    let state = caller.data_mut() as *mut HostState;
    // SAFETY: see `strings::with_mem`.
    let alloc = unsafe { &mut (*state).allocator };
    let mut mem = CallerMemory::new(caller);
    f(&mut mem, alloc)
}

/// §4.4 "Regex": "Invalid patterns are treated as non-match (return 0 or
/// None) rather than signaling a distinct error."
pub(crate) fn is_match(caller: &mut Caller<'_, HostState>, text_ptr: u32, pat_ptr: u32) -> RuntimeResult<i32> {
    with_mem(caller, |mem, _alloc| {
        let text = read_string(mem, text_ptr)?;
        let pat = read_string(mem, pat_ptr)?;
        Ok(match Regex::new(&pat) {
            Ok(re) => re.is_match(&text) as i32,
            Err(_) => 0,
        })
    })
}

pub(crate) fn captures(caller: &mut Caller<'_, HostState>, text_ptr: u32, pat_ptr: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let text = read_string(mem, text_ptr)?;
        let pat = read_string(mem, pat_ptr)?;
        let Ok(re) = Regex::new(&pat) else {
            return write_narrow_tagged(alloc, mem, 1, 0);
        };
        let Some(caps) = re.captures(&text) else {
            return write_narrow_tagged(alloc, mem, 1, 0);
        };
        let mut ptrs = Vec::new();
        for group in caps.iter() {
            let s = group.map(|m| m.as_str()).unwrap_or("");
            ptrs.push(alloc_string(alloc, mem, s)? as i32);
        }
        let list_ptr = alloc_list_i32(alloc, mem, &ptrs)?;
        write_narrow_tagged(alloc, mem, 0, list_ptr as i32)
    })
}
