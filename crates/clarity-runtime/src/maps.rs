use std::collections::HashMap;
use std::sync::Arc;

use wasmtime::Caller;

use clarity_alloc::{Allocator, LinearMemory};

use crate::error::RuntimeResult;
use crate::heap::{alloc_string, read_string, write_narrow_tagged, write_wide_tagged};
use crate::lists::{alloc_list_i32, alloc_list_i64};
use crate::memory::CallerMemory;
use crate::state::{HostState, ImmutableMap, MapKey, MapValue};

fn with_mem<T>(
    caller: &mut Caller<'_, HostState>,
    f: impl FnOnce(&mut CallerMemory<'_, '_>, &mut HostState) -> RuntimeResult<T>,
) -> RuntimeResult<T> {
    let state = caller.data_mut() as *mut HostState;
    // SAFETY: `mem` borrows only the memory export; the `&mut HostState`
    // passed to `f` is used only for the map table and allocator fields,
    // never re-entering `mem`'s borrow.
    let host = unsafe { &mut *state };
    let mut mem = CallerMemory::new(caller);
    f(&mut mem, host)
}

fn lookup(host: &HostState, handle: i32) -> ImmutableMap {
    host.maps.get(&handle).cloned().unwrap_or_else(|| Arc::new(HashMap::new()))
}

pub(crate) fn new(caller: &mut Caller<'_, HostState>) -> RuntimeResult<i32> {
    with_mem(caller, |_mem, host| {
        let handle = host.alloc_map_handle();
        host.maps.insert(handle, Arc::new(HashMap::new()));
        Ok(handle)
    })
}

pub(crate) fn size(caller: &mut Caller<'_, HostState>, handle: i32) -> RuntimeResult<i64> {
    with_mem(caller, |_mem, host| Ok(lookup(host, handle).len() as i64))
}

pub(crate) fn contains_string_key(
    caller: &mut Caller<'_, HostState>,
    handle: i32,
    key_ptr: u32,
) -> RuntimeResult<i32> {
    with_mem(caller, |mem, host| {
        let key = read_string(mem, key_ptr)?;
        Ok(lookup(host, handle).contains_key(&MapKey::Str(key)) as i32)
    })
}

pub(crate) fn contains_int_key(
    caller: &mut Caller<'_, HostState>,
    handle: i32,
    key: i64,
) -> RuntimeResult<i32> {
    with_mem(caller, |_mem, host| {
        Ok(lookup(host, handle).contains_key(&MapKey::Int(key)) as i32)
    })
}

fn get(map: &ImmutableMap, key: MapKey) -> Option<MapValue> {
    map.get(&key).copied()
}

pub(crate) fn get_string_key_i32(
    caller: &mut Caller<'_, HostState>,
    handle: i32,
    key_ptr: u32,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let key = read_string(mem, key_ptr)?;
        let map = lookup(host, handle);
        match get(&map, MapKey::Str(key)) {
            Some(MapValue::I32(v)) => write_narrow_tagged(&mut host.allocator, mem, 0, v),
            _ => write_narrow_tagged(&mut host.allocator, mem, 1, 0),
        }
    })
}

pub(crate) fn get_string_key_i64(
    caller: &mut Caller<'_, HostState>,
    handle: i32,
    key_ptr: u32,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let key = read_string(mem, key_ptr)?;
        let map = lookup(host, handle);
        match get(&map, MapKey::Str(key)) {
            Some(MapValue::I64(v)) => write_wide_tagged(&mut host.allocator, mem, 0, v),
            _ => write_wide_tagged(&mut host.allocator, mem, 1, 0),
        }
    })
}

pub(crate) fn get_int_key_i32(
    caller: &mut Caller<'_, HostState>,
    handle: i32,
    key: i64,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let map = lookup(host, handle);
        match get(&map, MapKey::Int(key)) {
            Some(MapValue::I32(v)) => write_narrow_tagged(&mut host.allocator, mem, 0, v),
            _ => write_narrow_tagged(&mut host.allocator, mem, 1, 0),
        }
    })
}

pub(crate) fn get_int_key_i64(
    caller: &mut Caller<'_, HostState>,
    handle: i32,
    key: i64,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let map = lookup(host, handle);
        match get(&map, MapKey::Int(key)) {
            Some(MapValue::I64(v)) => write_wide_tagged(&mut host.allocator, mem, 0, v),
            _ => write_wide_tagged(&mut host.allocator, mem, 1, 0),
        }
    })
}

/// Every `set`/`remove` clones the backing dictionary into a fresh handle,
/// leaving the original untouched (§4.4: "functional-update semantics").
fn insert_new_handle(host: &mut HostState, base: &ImmutableMap, key: MapKey, value: MapValue) -> i32 {
    let mut next: HashMap<MapKey, MapValue> = (**base).clone();
    next.insert(key, value);
    let handle = host.alloc_map_handle();
    host.maps.insert(handle, Arc::new(next));
    handle
}

pub(crate) fn set_string_key_i32(
    caller: &mut Caller<'_, HostState>,
    handle: i32,
    key_ptr: u32,
    value: i32,
) -> RuntimeResult<i32> {
    with_mem(caller, |mem, host| {
        let key = read_string(mem, key_ptr)?;
        let base = lookup(host, handle);
        Ok(insert_new_handle(host, &base, MapKey::Str(key), MapValue::I32(value)))
    })
}

pub(crate) fn set_string_key_i64(
    caller: &mut Caller<'_, HostState>,
    handle: i32,
    key_ptr: u32,
    value: i64,
) -> RuntimeResult<i32> {
    with_mem(caller, |mem, host| {
        let key = read_string(mem, key_ptr)?;
        let base = lookup(host, handle);
        Ok(insert_new_handle(host, &base, MapKey::Str(key), MapValue::I64(value)))
    })
}

pub(crate) fn set_int_key_i32(
    caller: &mut Caller<'_, HostState>,
    handle: i32,
    key: i64,
    value: i32,
) -> RuntimeResult<i32> {
    with_mem(caller, |_mem, host| {
        let base = lookup(host, handle);
        Ok(insert_new_handle(host, &base, MapKey::Int(key), MapValue::I32(value)))
    })
}

pub(crate) fn set_int_key_i64(
    caller: &mut Caller<'_, HostState>,
    handle: i32,
    key: i64,
    value: i64,
) -> RuntimeResult<i32> {
    with_mem(caller, |_mem, host| {
        let base = lookup(host, handle);
        Ok(insert_new_handle(host, &base, MapKey::Int(key), MapValue::I64(value)))
    })
}

pub(crate) fn remove_string_key(
    caller: &mut Caller<'_, HostState>,
    handle: i32,
    key_ptr: u32,
) -> RuntimeResult<i32> {
    with_mem(caller, |mem, host| {
        let key = MapKey::Str(read_string(mem, key_ptr)?);
        let base = lookup(host, handle);
        // Removal is idempotent (§4.4): removing an absent key still
        // yields a fresh handle over an unchanged dictionary.
        let mut next = (*base).clone();
        next.remove(&key);
        let new_handle = host.alloc_map_handle();
        host.maps.insert(new_handle, Arc::new(next));
        Ok(new_handle)
    })
}

pub(crate) fn remove_int_key(
    caller: &mut Caller<'_, HostState>,
    handle: i32,
    key: i64,
) -> RuntimeResult<i32> {
    with_mem(caller, |_mem, host| {
        let base = lookup(host, handle);
        let mut next = (*base).clone();
        next.remove(&MapKey::Int(key));
        let new_handle = host.alloc_map_handle();
        host.maps.insert(new_handle, Arc::new(next));
        Ok(new_handle)
    })
}

/// Keys can be either string- or int-flavored depending on the map; the
/// ABI gives `map_keys`/`map_values` a single signature for both (spec.md
/// §4.4 lists no per-flavor variant for these two). We infer the flavor
/// from whatever is actually stored and emit the matching list width; an
/// empty map has no flavor to infer and defaults to an empty `i32` list,
/// which is bit-identical to an empty `i64` list (both are a zero count
/// with no payload). Recorded as an Open Question resolution in
/// DESIGN.md.
pub(crate) fn keys(caller: &mut Caller<'_, HostState>, handle: i32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let map = lookup(host, handle);
        if map.keys().any(|k| matches!(k, MapKey::Int(_))) {
            let mut ints: Vec<i64> = map.keys().filter_map(|k| match k {
                MapKey::Int(i) => Some(*i),
                _ => None,
            }).collect();
            ints.sort_unstable();
            alloc_list_i64(&mut host.allocator, mem, &ints)
        } else {
            let mut strs: Vec<&str> = map.keys().filter_map(|k| match k {
                MapKey::Str(s) => Some(s.as_str()),
                _ => None,
            }).collect();
            strs.sort_unstable();
            let mut ptrs = Vec::with_capacity(strs.len());
            for s in strs {
                ptrs.push(alloc_string(&mut host.allocator, mem, s)? as i32);
            }
            alloc_list_i32(&mut host.allocator, mem, &ptrs)
        }
    })
}

pub(crate) fn values(caller: &mut Caller<'_, HostState>, handle: i32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let map = lookup(host, handle);
        let mut keys: Vec<&MapKey> = map.keys().collect();
        keys.sort_by_key(|k| match k {
            MapKey::Str(s) => s.clone(),
            MapKey::Int(i) => i.to_string(),
        });
        if map.values().any(|v| matches!(v, MapValue::I64(_))) {
            let ints: Vec<i64> = keys.iter().map(|k| match map[*k] {
                MapValue::I64(v) => v,
                MapValue::I32(v) => v as i64,
            }).collect();
            alloc_list_i64(&mut host.allocator, mem, &ints)
        } else {
            let ints: Vec<i32> = keys.iter().map(|k| match map[*k] {
                MapValue::I32(v) => v,
                MapValue::I64(v) => v as i32,
            }).collect();
            alloc_list_i32(&mut host.allocator, mem, &ints)
        }
    })
}
