//! The resolved intermediate representation the code generator consumes.
//!
//! Everything here is assumed fully resolved by an upstream type checker
//! (out of scope per spec.md §1): every expression already carries its
//! `SourceType`, every match is known-exhaustive, every call is either a
//! direct call to a known function or an indirect call through a value
//! of known `FnSig`. The code generator never re-derives any of this; if
//! an invariant here is violated the generator treats it as an
//! unrecoverable bug (spec.md §7), not a recoverable error.

mod expr;
mod module;
mod pattern;

pub use expr::{BinOp, Expr, ExprKind, UnOp};
pub use module::{FunctionDecl, Module, Param, RecordDecl, UnionDecl};
pub use pattern::{MatchArm, Pattern};

pub use clarity_abi::SourceType;
