use crate::ast::{ConditionExpr, Literal};
use crate::error::{CompileError, Result};
use crate::operator::{ConditionOp, UnaryOp};
use sqlparser::ast::{BinaryOperator, Expr as SqlExpr, UnaryOperator, Value, ValueWithSpan};
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;
use tracing::debug;

/// Parse a filter string with the SQL front end and convert the result
/// into the condition AST.
pub fn parse_filter(filter: &str) -> Result<ConditionExpr> {
    let dialect = GenericDialect {};
    let expr = Parser::new(&dialect).try_with_sql(filter)?.parse_expr()?;
    debug!("Parsed filter: {}", filter);
    convert_expr(expr)
}

fn convert_expr(expr: SqlExpr) -> Result<ConditionExpr> {
    match expr {
        SqlExpr::BinaryOp { left, op, right } => Ok(ConditionExpr::Binary {
            op: convert_binary_op(&op)?,
            left: Box::new(convert_expr(*left)?),
            right: Box::new(convert_expr(*right)?),
        }),
        // The front end gives LIKE its own node; fold it back into a
        // binary so rejection happens in one place.
        SqlExpr::Like {
            negated,
            expr,
            pattern,
            ..
        } => Ok(ConditionExpr::Binary {
            op: if negated {
                ConditionOp::NotLike
            } else {
                ConditionOp::Like
            },
            left: Box::new(convert_expr(*expr)?),
            right: Box::new(convert_expr(*pattern)?),
        }),
        SqlExpr::Identifier(ident) => Ok(ConditionExpr::Column(ident.value)),
        SqlExpr::CompoundIdentifier(idents) => {
            let name = idents
                .into_iter()
                .map(|ident| ident.value)
                .collect::<Vec<_>>()
                .join(".");
            Ok(ConditionExpr::Column(name))
        }
        SqlExpr::Value(value) => convert_value(value),
        SqlExpr::Nested(inner) => Ok(ConditionExpr::paren(convert_expr(*inner)?)),
        SqlExpr::UnaryOp { op, expr } => Ok(ConditionExpr::Unary {
            op: convert_unary_op(&op)?,
            operand: Box::new(convert_expr(*expr)?),
        }),
        SqlExpr::InList {
            expr,
            list,
            negated,
        } => Ok(ConditionExpr::InList {
            expr: Box::new(convert_expr(*expr)?),
            list: list
                .into_iter()
                .map(convert_expr)
                .collect::<Result<Vec<_>>>()?,
            negated,
        }),
        other => Err(CompileError::UnsupportedExpression(format!("{other:?}"))),
    }
}

fn convert_binary_op(op: &BinaryOperator) -> Result<ConditionOp> {
    match op {
        BinaryOperator::Eq => Ok(ConditionOp::Eq),
        BinaryOperator::NotEq => Ok(ConditionOp::NotEq),
        BinaryOperator::Gt => Ok(ConditionOp::Gt),
        BinaryOperator::Lt => Ok(ConditionOp::Lt),
        BinaryOperator::GtEq => Ok(ConditionOp::GtEq),
        BinaryOperator::LtEq => Ok(ConditionOp::LtEq),
        BinaryOperator::And => Ok(ConditionOp::And),
        BinaryOperator::Or => Ok(ConditionOp::Or),
        BinaryOperator::Plus => Ok(ConditionOp::Add),
        BinaryOperator::Minus => Ok(ConditionOp::Subtract),
        BinaryOperator::Multiply => Ok(ConditionOp::Multiply),
        BinaryOperator::Divide => Ok(ConditionOp::Divide),
        BinaryOperator::Modulo => Ok(ConditionOp::Modulo),
        other => Err(CompileError::UnsupportedOperator(format!("{other:?}"))),
    }
}

fn convert_unary_op(op: &UnaryOperator) -> Result<UnaryOp> {
    match op {
        UnaryOperator::Not => Ok(UnaryOp::Not),
        UnaryOperator::Minus => Ok(UnaryOp::Neg),
        other => Err(CompileError::UnsupportedExpression(format!(
            "unary operator {other:?}"
        ))),
    }
}

fn convert_value(value: ValueWithSpan) -> Result<ConditionExpr> {
    match value.value {
        Value::Number(text, _) => Ok(ConditionExpr::Literal(number_literal(text))),
        Value::SingleQuotedString(text) | Value::DoubleQuotedString(text) => {
            Ok(ConditionExpr::Literal(Literal::string(text)))
        }
        Value::Boolean(flag) => Ok(ConditionExpr::Literal(Literal::untyped(flag.to_string()))),
        Value::Null => Ok(ConditionExpr::Literal(Literal::untyped("null"))),
        other => Err(CompileError::UnsupportedExpression(format!(
            "literal {other:?}"
        ))),
    }
}

/// Integer literals are recognized by shape; the value itself is parsed
/// out of the text only when the literal is compiled.
fn number_literal(text: String) -> Literal {
    if text.contains(['.', 'e', 'E']) {
        Literal::number(text)
    } else {
        Literal::int(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comparison() {
        let parsed = parse_filter("age = 30").unwrap();
        assert_eq!(
            parsed,
            ConditionExpr::binary(
                ConditionOp::Eq,
                ConditionExpr::column("age"),
                ConditionExpr::Literal(Literal::int("30")),
            )
        );
    }

    #[test]
    fn test_parse_qualified_column() {
        let parsed = parse_filter("t.age > 18").unwrap();
        assert_eq!(
            parsed,
            ConditionExpr::binary(
                ConditionOp::Gt,
                ConditionExpr::column("t.age"),
                ConditionExpr::Literal(Literal::int("18")),
            )
        );
    }

    #[test]
    fn test_parse_float_and_string_literals() {
        let parsed = parse_filter("score >= 4.5 AND name = 'alice'").unwrap();
        let ConditionExpr::Binary { op, left, right } = parsed else {
            panic!("expected a binary expression");
        };
        assert_eq!(op, ConditionOp::And);
        assert_eq!(
            *left,
            ConditionExpr::binary(
                ConditionOp::GtEq,
                ConditionExpr::column("score"),
                ConditionExpr::Literal(Literal::number("4.5")),
            )
        );
        assert_eq!(
            *right,
            ConditionExpr::binary(
                ConditionOp::Eq,
                ConditionExpr::column("name"),
                ConditionExpr::Literal(Literal::string("alice")),
            )
        );
    }

    #[test]
    fn test_parse_nested_group() {
        let parsed = parse_filter("(age >= 18)").unwrap();
        assert_eq!(
            parsed,
            ConditionExpr::paren(ConditionExpr::binary(
                ConditionOp::GtEq,
                ConditionExpr::column("age"),
                ConditionExpr::Literal(Literal::int("18")),
            ))
        );
    }

    #[test]
    fn test_parse_like_and_in_list() {
        let like = parse_filter("name LIKE 'a%'").unwrap();
        assert!(matches!(
            like,
            ConditionExpr::Binary {
                op: ConditionOp::Like,
                ..
            }
        ));

        let in_list = parse_filter("x IN (1, 2)").unwrap();
        assert!(matches!(
            in_list,
            ConditionExpr::InList { negated: false, .. }
        ));
    }

    #[test]
    fn test_parse_invalid_filter() {
        assert!(matches!(
            parse_filter("= ="),
            Err(CompileError::FilterParse(_))
        ));
    }
}
