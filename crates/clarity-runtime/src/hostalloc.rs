use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::memory::CallerMemory;
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

/// The module's own allocation hook (§4.2), exposed as a host import so
/// generated code can request raw heap space directly rather than
/// through a typed allocation helper.
pub(crate) fn host_alloc(caller: &mut Caller<'_, HostState>, size: i64) -> RuntimeResult<i32> {
    with_mem(caller, |mem, host| {
        Ok(host.allocator.alloc(size.max(0) as u32, mem)? as i32)
    })
}

pub(crate) fn host_free(caller: &mut Caller<'_, HostState>, ptr: i32) -> RuntimeResult<()> {
    with_mem(caller, |_mem, host| {
        host.allocator.free(ptr as u32);
        Ok(())
    })
}

/// Returns the current bump pointer as an arena mark (§4.2: "Arena save
/// returns the current bump pointer as an Int64 'mark'").
pub(crate) fn arena_save(caller: &mut Caller<'_, HostState>) -> RuntimeResult<i64> {
    with_mem(caller, |_mem, host| Ok(host.allocator.save() as i64))
}

pub(crate) fn arena_restore(caller: &mut Caller<'_, HostState>, mark: i64) -> RuntimeResult<()> {
    with_mem(caller, |_mem, host| {
        host.allocator.restore(mark.max(0) as u32)?;
        Ok(())
    })
}

/// Threads one live string across a region reclamation (§4.2's ordered
/// save/restore steps).
pub(crate) fn arena_restore_keeping_str(
    caller: &mut Caller<'_, HostState>,
    mark: i64,
    ptr: i32,
) -> RuntimeResult<i32> {
    with_mem(caller, |mem, host| {
        Ok(host.allocator.restore_keeping_str(mark.max(0) as u32, ptr as u32, mem)? as i32)
    })
}
