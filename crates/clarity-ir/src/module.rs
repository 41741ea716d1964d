use crate::expr::Expr;
use clarity_abi::{SourceType, Variant};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: SourceType,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub result: SourceType,
    pub body: Expr,
    /// Intended to be reachable by the host (exported from the emitted
    /// WASM module). Internal helper functions the checker's
    /// monomorphizer emits may set this to `false`.
    pub exported: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecordDecl {
    pub name: String,
    pub fields: Vec<(String, SourceType)>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UnionDecl {
    pub name: String,
    pub variants: Vec<Variant>,
}

/// A whole resolved program: one monomorphic declaration per concrete
/// instantiation (generics are specialized upstream; the generator sees
/// only this). This is the code generator's sole input.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Module {
    pub records: Vec<RecordDecl>,
    pub unions: Vec<UnionDecl>,
    pub functions: Vec<FunctionDecl>,
}
