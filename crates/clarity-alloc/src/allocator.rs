use std::collections::HashMap;

use crate::memory::{LinearMemory, MemoryError, PAGE_SIZE};
use clarity_abi::{HEADER_LEN, MIN_SIZE_CLASS_BYTES, PTR_ALIGN};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AllocError {
    #[error(transparent)]
    Memory(#[from] MemoryError),
    #[error("arena restore mark {mark} is above the current bump pointer {bump}")]
    MarkAboveBump { mark: u32, bump: u32 },
}

/// A power-of-two allocation bucket (§4.2, §GLOSSARY). Stored as the
/// rounded byte size rather than a log2 index so free-list lookups don't
/// need a second translation step.
pub type SizeClass = u32;

/// A saved bump pointer (§4.2: "Arena save returns the current bump
/// pointer as an Int64 'mark'"). Represented here as `u32` since no heap
/// offset within a 32-bit WASM address space needs more, and widened to
/// `i64` only at the host-import boundary (the source-level type of an
/// arena mark is `Int64`, per the ABI).
pub type ArenaMark = u32;

/// Point-in-time counters exposed to the front-end's memory-stats hook
/// (spec.md §1 names the hook but not its shape; SPEC_FULL.md §2 fixes
/// it here).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatorStats {
    pub bump_pointer: u32,
    pub live_allocations: usize,
    pub live_bytes: u64,
    pub intern_table_len: usize,
    pub size_class_histogram: Vec<(SizeClass, usize)>,
}

fn round_up_size_class(requested: u32) -> SizeClass {
    let requested = requested.max(MIN_SIZE_CLASS_BYTES);
    requested.next_power_of_two()
}

fn align_up(value: u32, align: u32) -> u32 {
    (value + align - 1) & !(align - 1)
}

/// Bump allocator with power-of-two free lists and arena-mark based bulk
/// reclamation (spec.md §4.2). Generic over nothing: the allocator itself
/// holds no reference to memory between calls, since every public method
/// takes the `LinearMemory` it should act on, keeping the allocator
/// trivially testable against `VecMemory` and reusable against a real
/// `wasmtime::Memory` export without either side owning the other.
#[derive(Debug)]
pub struct Allocator {
    heap_base: u32,
    bump: u32,
    free_lists: HashMap<SizeClass, Vec<u32>>,
    alloc_map: HashMap<u32, SizeClass>,
    intern: HashMap<Box<str>, u32>,
}

impl Allocator {
    /// `heap_base` is the module's `__heap_base`: everything below it is
    /// static data (string literals materialized by the code generator,
    /// per §4.3) and must never be bump-allocated over or reclaimed.
    pub fn new(heap_base: u32) -> Self {
        Allocator {
            heap_base,
            bump: heap_base,
            free_lists: HashMap::new(),
            alloc_map: HashMap::new(),
            intern: HashMap::new(),
        }
    }

    pub fn heap_base(&self) -> u32 {
        self.heap_base
    }

    pub fn bump_pointer(&self) -> u32 {
        self.bump
    }

    /// The size class a live pointer was allocated under, if any. Used by
    /// host primitives that were handed a bare pointer with no separate
    /// element-width tag (e.g. `list_tail`/`list_reverse`) and need to
    /// recover how the block was originally sized.
    pub fn allocated_size(&self, ptr: u32) -> Option<u32> {
        self.alloc_map.get(&ptr).copied()
    }

    /// Allocates a block of at least `size_bytes`, rounding up to a size
    /// class and preferring free-list reuse over bump growth (§4.2).
    pub fn alloc(
        &mut self,
        size_bytes: u32,
        mem: &mut impl LinearMemory,
    ) -> Result<u32, AllocError> {
        let size_class = round_up_size_class(size_bytes);
        if let Some(ptr) = self
            .free_lists
            .get_mut(&size_class)
            .and_then(|list| list.pop())
        {
            self.alloc_map.insert(ptr, size_class);
            return Ok(ptr);
        }
        let ptr = align_up(self.bump, PTR_ALIGN);
        let new_bump = ptr + size_class;
        self.ensure_capacity(new_bump, mem)?;
        self.bump = new_bump;
        self.alloc_map.insert(ptr, size_class);
        Ok(ptr)
    }

    fn ensure_capacity(
        &self,
        needed: u32,
        mem: &mut impl LinearMemory,
    ) -> Result<(), AllocError> {
        let have = mem.size_bytes();
        if needed <= have {
            return Ok(());
        }
        let short_by = needed - have;
        let pages = short_by.div_ceil(PAGE_SIZE);
        mem.grow(pages)?;
        Ok(())
    }

    /// Pushes `ptr` onto its size class's free list. Unknown pointers
    /// (never allocated, or already freed) are silently ignored (§4.2).
    pub fn free(&mut self, ptr: u32) {
        if let Some(size_class) = self.alloc_map.remove(&ptr) {
            self.free_lists.entry(size_class).or_default().push(ptr);
        }
    }

    /// Content-addressed string allocation: returns the existing pointer
    /// on a content hit, observable as pointer equality of equal strings
    /// (§4.2). The intern table is consulted and populated here so every
    /// caller (code-generated string literals, `string_concat`,
    /// `int_to_string`, ...) shares one dedup policy.
    pub fn intern_string(
        &mut self,
        content: &str,
        mem: &mut impl LinearMemory,
    ) -> Result<u32, AllocError> {
        if let Some(&ptr) = self.intern.get(content) {
            return Ok(ptr);
        }
        let bytes = content.as_bytes();
        let ptr = self.alloc(HEADER_LEN + bytes.len() as u32, mem)?;
        mem.write_u32(ptr, bytes.len() as u32)?;
        mem.write(ptr + HEADER_LEN, bytes)?;
        self.intern.insert(content.into(), ptr);
        Ok(ptr)
    }

    /// Returns the current bump pointer as an arena mark (§4.2).
    pub fn save(&self) -> ArenaMark {
        self.bump
    }

    /// Bulk-reclaims everything allocated at or after `mark`, in the
    /// order spec.md §4.2 specifies: intern table, then allocation map,
    /// then free lists, then the bump pointer itself. Any pointer a
    /// caller holds that was obtained at or after `mark` is dangling
    /// immediately after this call — that is a caller obligation, not
    /// something this crate can check.
    pub fn restore(&mut self, mark: ArenaMark) -> Result<(), AllocError> {
        if mark > self.bump {
            return Err(AllocError::MarkAboveBump {
                mark,
                bump: self.bump,
            });
        }
        self.intern.retain(|_, ptr| *ptr < mark);
        self.alloc_map.retain(|ptr, _| *ptr < mark);
        for list in self.free_lists.values_mut() {
            list.retain(|ptr| *ptr < mark);
        }
        self.bump = mark;
        Ok(())
    }

    /// Copies one string's content to a fresh allocation made *after* the
    /// restore (so it lands at or below `mark`, i.e. in the space the
    /// restore just reclaimed), then performs the full restore. This is
    /// the only way to thread a single live value across a region
    /// reclamation without the caller racing the reclamation itself
    /// (design note, §4.2).
    pub fn restore_keeping_str(
        &mut self,
        mark: ArenaMark,
        ptr: u32,
        mem: &mut impl LinearMemory,
    ) -> Result<u32, AllocError> {
        let len = mem.read_u32(ptr)?;
        let bytes = mem.read(ptr + HEADER_LEN, len)?.to_vec();
        let content = String::from_utf8_lossy(&bytes).into_owned();
        self.restore(mark)?;
        self.intern_string(&content, mem)
    }

    pub fn stats(&self) -> AllocatorStats {
        let mut histogram: HashMap<SizeClass, usize> = HashMap::new();
        let mut live_bytes = 0u64;
        for &size_class in self.alloc_map.values() {
            *histogram.entry(size_class).or_default() += 1;
            live_bytes += size_class as u64;
        }
        let mut size_class_histogram: Vec<_> = histogram.into_iter().collect();
        size_class_histogram.sort_by_key(|(sc, _)| *sc);
        AllocatorStats {
            bump_pointer: self.bump,
            live_allocations: self.alloc_map.len(),
            live_bytes,
            intern_table_len: self.intern.len(),
            size_class_histogram,
        }
    }
}
