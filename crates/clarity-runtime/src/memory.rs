use clarity_alloc::{LinearMemory, MemoryError};
use wasmtime::{AsContext, AsContextMut, Caller};

use crate::state::HostState;

/// Adapts a real `wasmtime::Memory` export, borrowed for the duration of a
/// single host call, to the `clarity_alloc::LinearMemory` seam. Built fresh
/// inside every host function body and dropped before the function
/// returns — it never outlives the `Caller` borrow it wraps (§4.2's
/// allocator has no idea it's talking to a guest at all).
pub(crate) struct CallerMemory<'a, 'b> {
    caller: &'a mut Caller<'b, HostState>,
    memory: wasmtime::Memory,
}

impl<'a, 'b> CallerMemory<'a, 'b> {
    pub(crate) fn new(caller: &'a mut Caller<'b, HostState>) -> Self {
        let memory = caller
            .get_export("memory")
            .and_then(|e| e.into_memory())
            .expect("every compiled module exports linear memory");
        CallerMemory { caller, memory }
    }
}

impl LinearMemory for CallerMemory<'_, '_> {
    fn grow(&mut self, pages: u32) -> Result<u32, MemoryError> {
        let prev = self
            .memory
            .grow(&mut *self.caller, pages as u64)
            .map_err(|_| MemoryError::GrowFailed { pages })?;
        Ok(prev as u32)
    }

    fn size_bytes(&self) -> u32 {
        self.memory.data(self.caller.as_context()).len() as u32
    }

    fn read(&self, offset: u32, len: u32) -> Result<&[u8], MemoryError> {
        let data = self.memory.data(self.caller.as_context());
        let start = offset as usize;
        let end = start + len as usize;
        data.get(start..end).ok_or(MemoryError::OutOfBounds {
            offset,
            len,
            size: data.len() as u32,
        })
    }

    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), MemoryError> {
        let size = self.memory.data(self.caller.as_context()).len() as u32;
        let data = self.memory.data_mut(self.caller.as_context_mut());
        let start = offset as usize;
        let end = start + bytes.len();
        let slot = data.get_mut(start..end).ok_or(MemoryError::OutOfBounds {
            offset,
            len: bytes.len() as u32,
            size,
        })?;
        slot.copy_from_slice(bytes);
        Ok(())
    }
}
