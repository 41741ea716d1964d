use crate::expr::Expr;

/// One arm of a `match` expression. `guard`, when present, is evaluated
/// with the arm's bindings in scope; the arm only matches if the
/// structural pattern matched *and* the guard evaluates truthy
/// (spec.md §4.3, "Every arm may carry a guard").
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchArm {
    pub pattern: Pattern,
    pub guard: Option<Expr>,
    pub body: Expr,
}

/// A structural pattern in a `match` arm. The scrutinee's resolved type
/// determines which subset of these the checker could have produced
/// (e.g. `IntRange` only against an `Int64` scrutinee); the generator
/// trusts this without re-validating it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Pattern {
    BoolLit(bool),
    IntLit(i64),
    /// Inclusive at both ends: `lo..hi` matches `lo <= n <= hi` (§4.3).
    IntRange { lo: i64, hi: i64 },
    /// Binds the scrutinee (or, for a union variant, the whole matched
    /// value) to a local name.
    Binding(String),
    Wildcard,
    /// A tagged-union variant pattern, with one sub-pattern per field in
    /// declaration order. Sub-patterns here are restricted to `Binding`
    /// and `Wildcard` by the checker (nested literal matching inside a
    /// variant field is expressed as a guard instead), but the generator
    /// does not enforce that restriction itself.
    Variant {
        tag: u32,
        field_bindings: Vec<Option<String>>,
    },
}
