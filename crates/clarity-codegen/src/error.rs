/// Bugs the code generator can encounter are, per spec.md §7, fatal at
/// compile time only — they never escape into the emitted module. This
/// type exists to give each one a precise message; there is no recovery
/// path, matching "the code generator propagates bugs as immediate
/// compile failures with a description of the offending node."
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("undefined variable `{0}` referenced in a resolved IR node")]
    UndefinedVariable(String),

    #[error("assignment to immutable binding `{0}`; the checker should have rejected this")]
    AssignToImmutable(String),

    #[error("call to unknown function or host import `{0}`")]
    UnknownCallee(String),

    #[error("field `{field}` is not declared on this record/variant")]
    UnknownField { field: String },

    #[error("match expression has no applicable arm and no wildcard fallback")]
    NonExhaustiveMatch,

    #[error("union layout error: {0}")]
    Layout(#[from] clarity_abi::LayoutError),

    #[error("unsupported expression kind reached the generator: {0}")]
    UnsupportedExpr(String),

    #[error("function `{0}` exceeds the WASM local-count limits of this target")]
    TooManyLocals(String),
}

pub type CodegenResult<T> = Result<T, CodegenError>;
