use crate::error::CompileError;
use std::fmt;

/// Binary operators the SQL front end can produce. Only the comparison and
/// logical subset has a wire mapping; everything else is rejected when the
/// condition is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOp {
    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,
    And,
    Or,
    Like,
    NotLike,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl ConditionOp {
    /// Canonical symbol the engine expects as a `FunctionExpr` name.
    pub fn canonical_symbol(self) -> Result<&'static str, CompileError> {
        match self {
            ConditionOp::Eq => Ok("="),
            ConditionOp::Gt => Ok(">"),
            ConditionOp::Lt => Ok("<"),
            ConditionOp::GtEq => Ok(">="),
            ConditionOp::LtEq => Ok("<="),
            ConditionOp::NotEq => Ok("!="),
            ConditionOp::And => Ok("and"),
            ConditionOp::Or => Ok("or"),
            other => Err(CompileError::UnsupportedOperator(other.to_string())),
        }
    }
}

impl fmt::Display for ConditionOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            ConditionOp::Eq => "eq",
            ConditionOp::NotEq => "neq",
            ConditionOp::Gt => "gt",
            ConditionOp::Lt => "lt",
            ConditionOp::GtEq => "gte",
            ConditionOp::LtEq => "lte",
            ConditionOp::And => "and",
            ConditionOp::Or => "or",
            ConditionOp::Like => "like",
            ConditionOp::NotLike => "not like",
            ConditionOp::Add => "+",
            ConditionOp::Subtract => "-",
            ConditionOp::Multiply => "*",
            ConditionOp::Divide => "/",
            ConditionOp::Modulo => "%",
        };
        write!(f, "{token}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "not"),
            UnaryOp::Neg => write!(f, "-"),
        }
    }
}
