use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::heap::{alloc_string, read_string, write_wide_tagged};
use crate::memory::CallerMemory;
use crate::state::HostState;

fn with_mem<T>(
    caller: &mut Caller<'_, HostState>,
    f: impl FnOnce(&mut CallerMemory<'_, '_>, &mut clarity_alloc::Allocator) -> RuntimeResult<T>,
) -> RuntimeResult<T> {
    let state = caller.data_mut() as *mut HostState;
    // SAFETY: `mem` borrows only the memory export; `alloc` borrows only the
    // allocator field. Neither aliases the other, and both live strictly
    // within this call.
    let alloc = unsafe { &mut (*state).allocator };
    let mut mem = CallerMemory::new(caller);
    f(&mut mem, alloc)
}

pub(crate) fn concat(caller: &mut Caller<'_, HostState>, a: u32, b: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let mut s = read_string(mem, a)?;
        s.push_str(&read_string(mem, b)?);
        alloc_string(alloc, mem, &s)
    })
}

pub(crate) fn eq(caller: &mut Caller<'_, HostState>, a: u32, b: u32) -> RuntimeResult<i32> {
    with_mem(caller, |mem, _| {
        Ok((read_string(mem, a)? == read_string(mem, b)?) as i32)
    })
}

pub(crate) fn length(caller: &mut Caller<'_, HostState>, a: u32) -> RuntimeResult<i64> {
    with_mem(caller, |mem, _| Ok(read_string(mem, a)?.chars().count() as i64))
}

pub(crate) fn substring(
    caller: &mut Caller<'_, HostState>,
    a: u32,
    start: i64,
    len: i64,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let chars: Vec<char> = read_string(mem, a)?.chars().collect();
        let n = chars.len() as i64;
        let start = start.clamp(0, n) as usize;
        let len = len.max(0);
        let end = ((start as i64) + len).clamp(0, n) as usize;
        let out: String = chars[start..end.max(start)].iter().collect();
        alloc_string(alloc, mem, &out)
    })
}

pub(crate) fn char_at(caller: &mut Caller<'_, HostState>, a: u32, idx: i64) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let s = read_string(mem, a)?;
        let out = if idx < 0 {
            String::new()
        } else {
            s.chars().nth(idx as usize).map(String::from).unwrap_or_default()
        };
        alloc_string(alloc, mem, &out)
    })
}

pub(crate) fn contains(caller: &mut Caller<'_, HostState>, a: u32, b: u32) -> RuntimeResult<i32> {
    with_mem(caller, |mem, _| {
        Ok(read_string(mem, a)?.contains(&read_string(mem, b)?) as i32)
    })
}

pub(crate) fn starts_with(caller: &mut Caller<'_, HostState>, a: u32, b: u32) -> RuntimeResult<i32> {
    with_mem(caller, |mem, _| {
        Ok(read_string(mem, a)?.starts_with(&read_string(mem, b)?) as i32)
    })
}

pub(crate) fn ends_with(caller: &mut Caller<'_, HostState>, a: u32, b: u32) -> RuntimeResult<i32> {
    with_mem(caller, |mem, _| {
        Ok(read_string(mem, a)?.ends_with(&read_string(mem, b)?) as i32)
    })
}

pub(crate) fn find(caller: &mut Caller<'_, HostState>, a: u32, b: u32) -> RuntimeResult<i64> {
    with_mem(caller, |mem, _| {
        let haystack = read_string(mem, a)?;
        let needle = read_string(mem, b)?;
        // §4.4 "find-index (returns -1 when absent)" counts in characters,
        // not bytes, to stay consistent with every other index-taking op.
        match haystack.find(&needle) {
            Some(byte_idx) => Ok(haystack[..byte_idx].chars().count() as i64),
            None => Ok(-1),
        }
    })
}

pub(crate) fn trim(caller: &mut Caller<'_, HostState>, a: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let trimmed = read_string(mem, a)?.trim().to_string();
        alloc_string(alloc, mem, &trimmed)
    })
}

pub(crate) fn split(caller: &mut Caller<'_, HostState>, a: u32, delim: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let s = read_string(mem, a)?;
        let d = read_string(mem, delim)?;
        let parts: Vec<&str> = if d.is_empty() {
            s.split("").filter(|p| !p.is_empty()).collect()
        } else {
            s.split(d.as_str()).collect()
        };
        let mut ptrs = Vec::with_capacity(parts.len());
        for p in parts {
            ptrs.push(alloc_string(alloc, mem, p)?);
        }
        crate::lists::alloc_list_i32(alloc, mem, &ptrs)
    })
}

pub(crate) fn replace_all(
    caller: &mut Caller<'_, HostState>,
    a: u32,
    from: u32,
    to: u32,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let s = read_string(mem, a)?;
        let from_s = read_string(mem, from)?;
        if from_s.is_empty() {
            return alloc_string(alloc, mem, &s);
        }
        let to_s = read_string(mem, to)?;
        alloc_string(alloc, mem, &s.replace(from_s.as_str(), &to_s))
    })
}

pub(crate) fn repeat(caller: &mut Caller<'_, HostState>, a: u32, count: i64) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let s = read_string(mem, a)?;
        let out = if count <= 0 {
            String::new()
        } else {
            s.repeat(count as usize)
        };
        alloc_string(alloc, mem, &out)
    })
}

pub(crate) fn code_point_at(
    caller: &mut Caller<'_, HostState>,
    a: u32,
    idx: i64,
) -> RuntimeResult<i64> {
    with_mem(caller, |mem, _| {
        if idx < 0 {
            return Ok(-1);
        }
        let s = read_string(mem, a)?;
        Ok(s.chars().nth(idx as usize).map(|c| c as i64).unwrap_or(-1))
    })
}

pub(crate) fn from_code_point(caller: &mut Caller<'_, HostState>, cp: i64) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let out = char::from_u32(cp as u32).map(String::from).unwrap_or_default();
        alloc_string(alloc, mem, &out)
    })
}

pub(crate) fn int_to_float(value: i64) -> f64 {
    value as f64
}

pub(crate) fn float_to_int(value: f64) -> i64 {
    value as i64
}

pub(crate) fn int_to_string(caller: &mut Caller<'_, HostState>, value: i64) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| alloc_string(alloc, mem, &value.to_string()))
}

pub(crate) fn float_to_string(caller: &mut Caller<'_, HostState>, value: f64) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| alloc_string(alloc, mem, &format!("{value}")))
}

/// Returns a pointer to a wide `Option<Int64>` object (§3 table): tag 0
/// (Some) with the parsed value, or tag 1 (None) when the string is empty
/// or not fully consumed by the parse (§4.4: "partial parses ... yield
/// None").
pub(crate) fn string_to_int(caller: &mut Caller<'_, HostState>, a: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let s = read_string(mem, a)?;
        match s.trim().parse::<i64>() {
            Ok(v) if !s.trim().is_empty() => write_wide_tagged(alloc, mem, 0, v),
            _ => write_wide_tagged(alloc, mem, 1, 0),
        }
    })
}

pub(crate) fn string_to_float(caller: &mut Caller<'_, HostState>, a: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, alloc| {
        let s = read_string(mem, a)?;
        match s.trim().parse::<f64>() {
            Ok(v) if !s.trim().is_empty() => {
                let ptr = alloc.alloc(12, mem)?;
                mem.write_u32(ptr, 0)?;
                mem.write_f64(ptr + 4, v)?;
                Ok(ptr)
            }
            _ => {
                let ptr = alloc.alloc(12, mem)?;
                mem.write_u32(ptr, 1)?;
                mem.write_f64(ptr + 4, 0.0)?;
                Ok(ptr)
            }
        }
    })
}

pub(crate) fn bytes_length(caller: &mut Caller<'_, HostState>, a: u32) -> RuntimeResult<i64> {
    with_mem(caller, |mem, _| Ok(crate::heap::read_bytes(mem, a)?.len() as i64))
}
