//! Expressions, layered by operator precedence.
//!
//! ```text
//! Expression                 a + b * -c < d
//!   AdditiveExpression       a + b * -c
//!     MultiplicativeExpression   b * -c
//!       NegatableExpression          -c
//!         PrimaryExpression           c
//! ```
//! Operator chains are stored left to right as a first operand followed by
//! `(operator, operand)` pairs.

use serde_derive::{Deserialize, Serialize};

use super::ident::Ident;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub left: AdditiveExpression,
    #[serde(default)]
    pub comparison: Option<Comparison>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub op: RelOp,
    pub right: AdditiveExpression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelOp {
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditiveExpression {
    pub first: MultiplicativeExpression,
    #[serde(default)]
    pub rest: Vec<(AddOp, MultiplicativeExpression)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOp {
    Plus,
    Minus,
    Or,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplicativeExpression {
    pub first: NegatableExpression,
    #[serde(default)]
    pub rest: Vec<(MulOp, NegatableExpression)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MulOp {
    Times,
    /// `/`
    Divide,
    /// `div`
    Div,
    Mod,
    And,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegatableExpression {
    Sign { sign: Sign, inner: Box<NegatableExpression> },
    Primary(PrimaryExpression),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Plus,
    Minus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryExpression {
    Variable(VariableAccess),
    Literal(Literal),
    /// A call of a method of the current object
    Function(FunctionDesignator),
    /// A call of a method of another object, `x.f(...)`
    Method(MethodDesignator),
    /// `new C(...)`
    ObjectInstantiation(ObjectInstantiation),
    Parens(Box<Expression>),
    Not(Box<PrimaryExpression>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Integer(i64),
    Real(f64),
    Char(char),
    Boolean(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableAccess {
    Identifier(Ident),
    /// `a[i, j]`
    Indexed { base: Box<VariableAccess>, indices: Vec<Expression> },
    /// `a.x`
    Attribute { base: Box<VariableAccess>, field: Ident },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDesignator {
    pub name: Ident,
    #[serde(default)]
    pub args: Vec<ActualParameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDesignator {
    pub receiver: VariableAccess,
    pub call: FunctionDesignator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectInstantiation {
    pub class: Ident,
    #[serde(default)]
    pub args: Vec<ActualParameter>,
}

/// An argument, optionally with output formatting
///
/// ```text
/// print(x:8:2)
///       ^ ^ ^----- precision
///       | \------- width
///       \--------- value
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualParameter {
    pub value: Expression,
    #[serde(default)]
    pub width: Option<Expression>,
    #[serde(default)]
    pub precision: Option<Expression>,
}
