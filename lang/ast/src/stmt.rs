use serde_derive::{Deserialize, Serialize};

use super::exp::{Expression, VariableAccess};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    Assignment(Assignment),
    If(If),
    Print(Print),
    While(While),
    /// `begin ... end`
    Compound(Vec<Statement>),
}

/// ```text
/// a[i].x := e
/// ^^^^^^    ^----- value
///   \------------- target
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub target: VariableAccess,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub cond: Expression,
    pub then_branch: Box<Statement>,
    #[serde(default)]
    pub else_branch: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Print {
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct While {
    pub cond: Expression,
    pub body: Box<Statement>,
}
