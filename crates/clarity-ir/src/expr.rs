use crate::pattern::MatchArm;
use clarity_abi::SourceType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    /// `++`: defined only over `String`; lowers to the host import
    /// `string_concat` (§4.3).
    Concat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum UnOp {
    Neg,
    Not,
}

/// One resolved expression node. Every node carries its `SourceType` via
/// `Expr::ty`; `ExprKind` holds the shape-specific data.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: SourceType,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ExprKind {
    IntLit(i64),
    FloatLit(f64),
    BoolLit(bool),
    StringLit(String),
    Ident(String),
    Unary(UnOp, Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    /// Direct call to a known top-level function by name.
    Call { callee: String, args: Vec<Expr> },
    /// Indirect call through a value of function-reference type,
    /// lowered via `call_indirect` against `sig`.
    CallIndirect {
        callee: Box<Expr>,
        args: Vec<Expr>,
        sig: clarity_abi::FnSig,
    },
    Let {
        name: String,
        mutable: bool,
        value: Box<Expr>,
        body: Box<Expr>,
    },
    /// Assignment to a previously `let mut`-bound name. Assignment to an
    /// immutable binding is a checker-level error and never appears here.
    Assign {
        name: String,
        value: Box<Expr>,
    },
    /// A sequence of statements with a terminal expression. Non-Unit
    /// intermediate statement values are dropped during lowering.
    Block(Vec<Expr>),
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Match {
        scrutinee: Box<Expr>,
        arms: Vec<MatchArm>,
    },
    ListLit(Vec<Expr>),
    RecordLit(Vec<(String, Expr)>),
    FieldAccess {
        base: Box<Expr>,
        field: String,
    },
    UnionCtor {
        tag: u32,
        fields: Vec<Expr>,
    },
}
