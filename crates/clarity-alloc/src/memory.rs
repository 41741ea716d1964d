/// Bytes per WASM page, fixed by the WASM spec.
pub const PAGE_SIZE: u32 = 65536;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MemoryError {
    #[error("read of {len} bytes at offset {offset} is out of bounds (memory size {size})")]
    OutOfBounds { offset: u32, len: u32, size: u32 },
    #[error("failed to grow linear memory by {pages} pages")]
    GrowFailed { pages: u32 },
}

/// The seam between the allocator and whatever actually backs WASM linear
/// memory. In the host runtime this is implemented over a real
/// `wasmtime::Memory` export; in unit tests it is a plain `Vec<u8>`
/// (`VecMemory`) so the allocator and arena logic can be exercised without
/// instantiating a module.
pub trait LinearMemory {
    /// Grows memory by `pages` whole WASM pages, returning the previous
    /// size in pages. Fails if the host refuses to grow further (OOM or
    /// an engine-imposed memory limit).
    fn grow(&mut self, pages: u32) -> Result<u32, MemoryError>;

    /// Current size in bytes.
    fn size_bytes(&self) -> u32;

    fn read(&self, offset: u32, len: u32) -> Result<&[u8], MemoryError>;

    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), MemoryError>;

    fn read_u32(&self, offset: u32) -> Result<u32, MemoryError> {
        let bytes = self.read(offset, 4)?;
        Ok(u32::from_le_bytes(bytes.try_into().unwrap()))
    }

    fn write_u32(&mut self, offset: u32, value: u32) -> Result<(), MemoryError> {
        self.write(offset, &value.to_le_bytes())
    }

    fn read_i64(&self, offset: u32) -> Result<i64, MemoryError> {
        let bytes = self.read(offset, 8)?;
        Ok(i64::from_le_bytes(bytes.try_into().unwrap()))
    }

    fn write_i64(&mut self, offset: u32, value: i64) -> Result<(), MemoryError> {
        self.write(offset, &value.to_le_bytes())
    }

    fn read_f64(&self, offset: u32) -> Result<f64, MemoryError> {
        let bytes = self.read(offset, 8)?;
        Ok(f64::from_le_bytes(bytes.try_into().unwrap()))
    }

    fn write_f64(&mut self, offset: u32, value: f64) -> Result<(), MemoryError> {
        self.write(offset, &value.to_le_bytes())
    }
}

/// An in-process stand-in for WASM linear memory, used by `clarity-alloc`'s
/// own tests and by `clarity-codegen`/`clarity-runtime` tests that don't
/// need a real `wasmtime::Instance`.
#[derive(Debug, Default)]
pub struct VecMemory {
    bytes: Vec<u8>,
}

impl VecMemory {
    pub fn new(initial_pages: u32) -> Self {
        VecMemory {
            bytes: vec![0u8; (initial_pages * PAGE_SIZE) as usize],
        }
    }
}

impl LinearMemory for VecMemory {
    fn grow(&mut self, pages: u32) -> Result<u32, MemoryError> {
        let prev_pages = self.bytes.len() as u32 / PAGE_SIZE;
        let new_len = self.bytes.len() + (pages as usize) * PAGE_SIZE as usize;
        self.bytes.resize(new_len, 0);
        Ok(prev_pages)
    }

    fn size_bytes(&self) -> u32 {
        self.bytes.len() as u32
    }

    fn read(&self, offset: u32, len: u32) -> Result<&[u8], MemoryError> {
        let start = offset as usize;
        let end = start + len as usize;
        self.bytes.get(start..end).ok_or(MemoryError::OutOfBounds {
            offset,
            len,
            size: self.size_bytes(),
        })
    }

    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), MemoryError> {
        let start = offset as usize;
        let end = start + bytes.len();
        let size = self.size_bytes();
        let slot = self
            .bytes
            .get_mut(start..end)
            .ok_or(MemoryError::OutOfBounds {
                offset,
                len: bytes.len() as u32,
                size,
            })?;
        slot.copy_from_slice(bytes);
        Ok(())
    }
}
