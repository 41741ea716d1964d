use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::heap::read_string;
use crate::memory::CallerMemory;
use crate::policy::Effect;
use crate::state::{HostState, TraceSpan};

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

/// Allocates a span id (§4.4 "`start(op)` allocates a span id").
pub(crate) fn start(caller: &mut Caller<'_, HostState>, op_ptr: u32) -> RuntimeResult<i64> {
    with_mem(caller, |mem, host| {
        let op = read_string(mem, op_ptr)?;
        let _ = host.gate.check(Effect::Trace, None);
        let handle = host.alloc_trace_handle();
        host.traces.insert(
            handle,
            TraceSpan {
                op,
                started: std::time::Instant::now(),
                events: Vec::new(),
            },
        );
        Ok(handle)
    })
}

/// Appends an event with a millisecond offset from `start` (§4.4:
/// "`log(id, msg)` appends an event with a millisecond offset").
pub(crate) fn log(caller: &mut Caller<'_, HostState>, id: i64, msg_ptr: u32) -> RuntimeResult<()> {
    with_mem(caller, |mem, host| {
        let msg = read_string(mem, msg_ptr)?;
        if let Some(span) = host.traces.get_mut(&id) {
            let offset_ms = span.started.elapsed().as_millis() as u64;
            span.events.push((offset_ms, msg));
        }
        Ok(())
    })
}

/// Flushes the span to the audit log with its total duration (§4.4:
/// "`end(id)` flushes to the audit log with duration").
pub(crate) fn end(caller: &mut Caller<'_, HostState>, id: i64) -> RuntimeResult<()> {
    with_mem(caller, |_mem, host| {
        if let Some(span) = host.traces.remove(&id) {
            let duration_ms = span.started.elapsed().as_millis() as u64;
            host.gate.audit(
                Effect::Trace,
                &span.op,
                "ok",
                None,
                Some(duration_ms),
                Some(&id.to_string()),
            );
        }
        Ok(())
    })
}
