use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::heap::read_string;
use crate::memory::CallerMemory;
use crate::state::{HostState, TestFailure};

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

/// `kind` names the comparison the compiled assertion already resolved
/// (`eq`, `ne`, `true`, `false`); `actual`/`expected` are the textual
/// representations the codegen'd assertion produced for both sides.
/// There is no separate pass/fail flag in the fixed four-pointer ABI
/// signature, so pass/fail is derived here from `kind` plus the two
/// value strings.
fn passed(kind: &str, actual: &str, expected: &str) -> bool {
    match kind {
        "true" => actual == "true",
        "false" => actual == "false",
        "ne" => actual != expected,
        _ => actual == expected,
    }
}

/// Accumulates failures rather than throwing (§4.4 "Test assertions":
/// "each assertion increments a counter and, on failure, pushes a
/// record").
pub(crate) fn test_assert(
    caller: &mut Caller<'_, HostState>,
    kind_ptr: u32,
    actual_ptr: u32,
    expected_ptr: u32,
    test_name_ptr: u32,
) -> RuntimeResult<()> {
    with_mem(caller, |mem, host| {
        let kind = read_string(mem, kind_ptr)?;
        let actual = read_string(mem, actual_ptr)?;
        let expected = read_string(mem, expected_ptr)?;
        let test_name = read_string(mem, test_name_ptr)?;
        host.test_count += 1;
        if !passed(&kind, &actual, &expected) {
            host.test_failures.push(TestFailure {
                kind,
                actual,
                expected,
                test_name,
            });
        }
        Ok(())
    })
}
