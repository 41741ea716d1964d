use sha2::{Digest, Sha256};
use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::heap::{alloc_string, read_string};
use crate::memory::CallerMemory;
use crate::state::HostState;

/// SHA-256 of the input's UTF-8 bytes, as a 64-character lowercase hex
/// digest (§4.4 "Crypto").
pub(crate) fn sha256_hex(caller: &mut Caller<'_, HostState>, ptr: u32) -> RuntimeResult<u32> {
    let state = caller.data_mut() as *mut HostState;
    // SAFETY: see `strings::with_mem`.
    let alloc = unsafe { &mut (*state).allocator };
    let mut mem = CallerMemory::new(caller);
    let input = read_string(&mem, ptr)?;
    let digest = Sha256::digest(input.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    alloc_string(alloc, &mut mem, &hex)
}
