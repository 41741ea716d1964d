/// Runtime-level failures that can surface while wiring or running the
/// host side of a compiled module. Per spec.md §7, failures a *primitive*
/// encounters while servicing a call are never exceptions — they're
/// encoded back into the guest as `None`/`Err`/`false`. This type exists
/// only for failures in the Rust embedding itself: a missing export, a
/// `wasmtime` instantiation error, or an allocator running out of linear
/// memory to grow into (spec.md §7: "an unrecoverable runtime condition
/// ... terminates the host process").
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("compiled module exports no callable function named `{0}`")]
    UnknownExport(String),

    #[error("allocator error: {0}")]
    Alloc(#[from] clarity_alloc::AllocError),

    #[error("memory access error: {0}")]
    Memory(#[from] clarity_alloc::MemoryError),

    #[error("wasmtime engine error: {0}")]
    Wasmtime(#[from] anyhow::Error),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
