use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::heap::{alloc_string, read_string, write_narrow_tagged};
use crate::lists::alloc_list_i32;
use crate::memory::CallerMemory;
use crate::state::{HostState, MapKey, MapValue};

fn with_mem<T>(
    caller: &mut Caller<'_, HostState>,
    f: impl FnOnce(&mut CallerMemory<'_, '_>, &mut HostState) -> RuntimeResult<T>,
) -> RuntimeResult<T> {
    let state = caller.data_mut() as *mut HostState;
    // SAFETY: see `maps::with_mem`.
    let host = unsafe { &mut *state };
    let mut mem = CallerMemory::new(caller);
    f(&mut mem, host)
}

/// The literal text a scalar JSON value is stored as inside the map
/// backing (§4.4: "stringify ... serializes each value as a JSON literal
/// if it matches the syntactic forms `null`, `true`, `false`, or a JSON
/// number, otherwise as a JSON string"). Storing the *literal* form, not
/// a tagged Rust enum, means `stringify` only has to copy it back out —
/// it re-derives "is this quoted or not" the same way `parse` decided it,
/// per the design note against duplicating decision logic.
fn scalar_literal(v: &Value) -> Option<String> {
    match v {
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn looks_like_bare_literal(s: &str) -> bool {
    s == "null" || s == "true" || s == "false" || s.parse::<f64>().is_ok()
}

/// Parses a flat JSON object of scalar values into a fresh map handle
/// (§4.4: "accepts a flat object of scalar values ... nested objects and
/// arrays at the root yield None").
pub(crate) fn parse(caller: &mut Caller<'_, HostState>, ptr: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let text = read_string(mem, ptr)?;
        let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(&text) else {
            return write_narrow_tagged(&mut host.allocator, mem, 1, 0);
        };
        let mut entries = HashMap::new();
        for (k, v) in &obj {
            let Some(literal) = scalar_literal(v) else {
                return write_narrow_tagged(&mut host.allocator, mem, 1, 0);
            };
            let str_ptr = alloc_string(&mut host.allocator, mem, &literal)?;
            entries.insert(MapKey::Str(k.clone()), MapValue::I32(str_ptr as i32));
        }
        let handle = host.alloc_map_handle();
        host.maps.insert(handle, Arc::new(entries));
        write_narrow_tagged(&mut host.allocator, mem, 0, handle)
    })
}

/// Serializes a map handle back to JSON text (§4.4 "stringify"). Mirrors
/// the Open Question in spec.md §9: a stored value that *looks* numeric
/// or boolean is re-emitted unquoted even if it started life as a quoted
/// string (e.g. `"00123"` round-trips as the bare number `00123`).
pub(crate) fn stringify(caller: &mut Caller<'_, HostState>, handle: i32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let map = host.maps.get(&handle).cloned().unwrap_or_else(|| Arc::new(HashMap::new()));
        let mut keys: Vec<&str> = map
            .keys()
            .filter_map(|k| match k {
                MapKey::Str(s) => Some(s.as_str()),
                MapKey::Int(_) => None,
            })
            .collect();
        keys.sort_unstable();
        let mut parts = Vec::with_capacity(keys.len());
        for k in keys {
            let MapValue::I32(str_ptr) = map[&MapKey::Str(k.to_string())] else {
                continue;
            };
            let literal = read_string(mem, str_ptr as u32)?;
            if looks_like_bare_literal(&literal) {
                parts.push(format!("{}:{}", serde_json::to_string(k).unwrap(), literal));
            } else {
                parts.push(format!(
                    "{}:{}",
                    serde_json::to_string(k).unwrap(),
                    serde_json::to_string(&literal).unwrap()
                ));
            }
        }
        let out = format!("{{{}}}", parts.join(","));
        alloc_string(&mut host.allocator, mem, &out)
    })
}

pub(crate) fn get(
    caller: &mut Caller<'_, HostState>,
    handle: i32,
    key_ptr: u32,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let key = read_string(mem, key_ptr)?;
        let map = host.maps.get(&handle).cloned().unwrap_or_else(|| Arc::new(HashMap::new()));
        match map.get(&MapKey::Str(key)) {
            Some(MapValue::I32(ptr)) => write_narrow_tagged(&mut host.allocator, mem, 0, *ptr),
            _ => write_narrow_tagged(&mut host.allocator, mem, 1, 0),
        }
    })
}

fn navigate<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        if let Ok(idx) = segment.parse::<usize>() {
            current = current.as_array()?.get(idx)?;
        } else {
            current = current.as_object()?.get(segment)?;
        }
    }
    Some(current)
}

fn value_as_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Dotted-path lookup over raw JSON text, supporting numeric path
/// segments to traverse arrays (§4.4: "`get_path` by dot-separated path
/// (supports numeric indices to traverse arrays)"). Operates on the text
/// directly rather than through the flat map registry, since a path can
/// cross into nested objects/arrays that `parse` rejects at the root.
pub(crate) fn get_path(
    caller: &mut Caller<'_, HostState>,
    text_ptr: u32,
    path_ptr: u32,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let text = read_string(mem, text_ptr)?;
        let path = read_string(mem, path_ptr)?;
        let found = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|root| navigate(&root, &path).and_then(value_as_text));
        match found {
            Some(s) => {
                let ptr = alloc_string(&mut host.allocator, mem, &s)?;
                write_narrow_tagged(&mut host.allocator, mem, 0, ptr as i32)
            }
            None => write_narrow_tagged(&mut host.allocator, mem, 1, 0),
        }
    })
}

pub(crate) fn array_length(caller: &mut Caller<'_, HostState>, ptr: u32) -> RuntimeResult<i64> {
    with_mem(caller, |mem, _host| {
        let text = read_string(mem, ptr)?;
        Ok(match serde_json::from_str::<Value>(&text) {
            Ok(Value::Array(a)) => a.len() as i64,
            _ => -1,
        })
    })
}

pub(crate) fn array_get(caller: &mut Caller<'_, HostState>, ptr: u32, idx: i64) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let text = read_string(mem, ptr)?;
        let out = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| v.as_array()?.get(usize::try_from(idx).ok()?).and_then(value_as_text))
            .unwrap_or_default();
        alloc_string(&mut host.allocator, mem, &out)
    })
}

pub(crate) fn keys(caller: &mut Caller<'_, HostState>, ptr: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let text = read_string(mem, ptr)?;
        let names: Vec<String> = match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(obj)) => obj.keys().cloned().collect(),
            _ => Vec::new(),
        };
        let mut ptrs = Vec::with_capacity(names.len());
        for name in &names {
            ptrs.push(alloc_string(&mut host.allocator, mem, name)? as i32);
        }
        alloc_list_i32(&mut host.allocator, mem, &ptrs)
    })
}
