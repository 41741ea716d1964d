use std::fs;

use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::heap::{alloc_string, read_string, write_narrow_tagged};
use crate::memory::CallerMemory;
use crate::policy::Effect;
use crate::state::HostState;

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

/// Sanitizes a checkpoint key to `[A-Za-z0-9_-]+` (§4.4: "keys are
/// sanitized"), matching `hitl::safe_key`'s character set.
fn safe_key(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect()
}

fn save(dir: &std::path::Path, key: &str, value: &str) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(format!("{}.ckpt", safe_key(key))), value)
}

fn load(dir: &std::path::Path, key: &str) -> Option<String> {
    fs::read_to_string(dir.join(format!("{}.ckpt", safe_key(key)))).ok()
}

pub(crate) fn checkpoint_save(
    caller: &mut Caller<'_, HostState>,
    key_ptr: u32,
    value_ptr: u32,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let key = read_string(mem, key_ptr)?;
        let value = read_string(mem, value_ptr)?;
        if let Err(e) = host.gate.check(Effect::Persist, None) {
            host.gate.audit(Effect::Persist, "checkpoint_save", "denied", None, None, Some(&key));
            let ptr = alloc_string(&mut host.allocator, mem, &e.to_string())? as i32;
            return write_narrow_tagged(&mut host.allocator, mem, 1, ptr);
        }
        let dir = host.config.checkpoint_dir.clone();
        let result = save(&dir, &key, &value);
        host.gate.audit(
            Effect::Persist,
            "checkpoint_save",
            if result.is_ok() { "ok" } else { "error" },
            None,
            None,
            Some(&key),
        );
        match result {
            Ok(()) => write_narrow_tagged(&mut host.allocator, mem, 0, 0),
            Err(e) => {
                let ptr = alloc_string(&mut host.allocator, mem, &e.to_string())? as i32;
                write_narrow_tagged(&mut host.allocator, mem, 1, ptr)
            }
        }
    })
}

pub(crate) fn checkpoint_load(caller: &mut Caller<'_, HostState>, key_ptr: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let key = read_string(mem, key_ptr)?;
        let _ = host.gate.check(Effect::Persist, None);
        let dir = host.config.checkpoint_dir.clone();
        let loaded = load(&dir, &key);
        host.gate.audit(
            Effect::Persist,
            "checkpoint_load",
            if loaded.is_some() { "ok" } else { "missing" },
            None,
            None,
            Some(&key),
        );
        match loaded {
            Some(text) => {
                let ptr = alloc_string(&mut host.allocator, mem, &text)? as i32;
                write_narrow_tagged(&mut host.allocator, mem, 0, ptr)
            }
            None => write_narrow_tagged(&mut host.allocator, mem, 1, 0),
        }
    })
}

/// Writes the checkpoint without allocating on the WASM heap — a plain
/// `i32` boolean result (§4.4: "can be called safely immediately before
/// an arena restore", i.e. it must not depend on the allocator staying
/// valid across the call).
pub(crate) fn checkpoint_save_raw(
    caller: &mut Caller<'_, HostState>,
    key_ptr: u32,
    value_ptr: u32,
) -> RuntimeResult<i32> {
    with_mem(caller, |mem, host| {
        let key = read_string(mem, key_ptr)?;
        let value = read_string(mem, value_ptr)?;
        if host.gate.check(Effect::Persist, None).is_err() {
            host.gate.audit(Effect::Persist, "checkpoint_save_raw", "denied", None, None, Some(&key));
            return Ok(0);
        }
        let dir = host.config.checkpoint_dir.clone();
        let result = save(&dir, &key, &value);
        host.gate.audit(
            Effect::Persist,
            "checkpoint_save_raw",
            if result.is_ok() { "ok" } else { "error" },
            None,
            None,
            Some(&key),
        );
        Ok(if result.is_ok() { 1 } else { 0 })
    })
}
