use crate::operator::{ConditionOp, UnaryOp};

/// Filter expression tree handed over by the SQL front end.
///
/// The set of variants is closed: the compiler matches it exhaustively,
/// and nodes the engine cannot evaluate are rejected there instead of
/// silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionExpr {
    Binary {
        op: ConditionOp,
        left: Box<ConditionExpr>,
        right: Box<ConditionExpr>,
    },
    Column(String),
    Literal(Literal),
    Paren(Box<ConditionExpr>),
    Unary {
        op: UnaryOp,
        operand: Box<ConditionExpr>,
    },
    InList {
        expr: Box<ConditionExpr>,
        list: Vec<ConditionExpr>,
        negated: bool,
    },
}

impl ConditionExpr {
    pub fn binary(op: ConditionOp, left: ConditionExpr, right: ConditionExpr) -> Self {
        ConditionExpr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn column(name: impl Into<String>) -> Self {
        ConditionExpr::Column(name.into())
    }

    pub fn paren(inner: ConditionExpr) -> Self {
        ConditionExpr::Paren(Box::new(inner))
    }

    /// Short node description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            ConditionExpr::Binary { op, .. } => format!("binary `{op}`"),
            ConditionExpr::Column(name) => format!("column `{name}`"),
            ConditionExpr::Literal(literal) => format!("literal `{}`", literal.text),
            ConditionExpr::Paren(_) => "parenthesized group".to_string(),
            ConditionExpr::Unary { op, .. } => format!("unary `{op}`"),
            ConditionExpr::InList { negated: false, .. } => "IN list".to_string(),
            ConditionExpr::InList { negated: true, .. } => "NOT IN list".to_string(),
        }
    }
}

/// Scalar constant as produced by the front end: the raw text plus the
/// parser's type hints. The text is only parsed into the numeric domain
/// when the literal is compiled.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub text: String,
    pub is_int: bool,
    pub is_number: bool,
    pub is_string: bool,
}

impl Literal {
    pub fn int(text: impl Into<String>) -> Self {
        Literal {
            text: text.into(),
            is_int: true,
            is_number: true,
            is_string: false,
        }
    }

    pub fn number(text: impl Into<String>) -> Self {
        Literal {
            text: text.into(),
            is_int: false,
            is_number: true,
            is_string: false,
        }
    }

    pub fn string(text: impl Into<String>) -> Self {
        Literal {
            text: text.into(),
            is_int: false,
            is_number: false,
            is_string: true,
        }
    }

    /// A literal the front end could not classify (booleans, NULL).
    pub fn untyped(text: impl Into<String>) -> Self {
        Literal {
            text: text.into(),
            is_int: false,
            is_number: false,
            is_string: false,
        }
    }
}
