use crate::ast::{ConditionExpr, Literal};
use crate::error::{CompileError, Result};
use wire_model::expr::{ColumnExpr, ConstantExpr, FunctionExpr, WireExpr};

/// Compile a condition tree into the engine's wire expression form.
///
/// Binary nodes compile post-order, operands kept in left-to-right order.
/// Grouping is transparent: a parenthesized node compiles to its child's
/// wire tree. The call either returns a complete tree or fails; no partial
/// output is ever produced.
pub fn compile_condition(expr: &ConditionExpr) -> Result<WireExpr> {
    match expr {
        ConditionExpr::Binary { op, left, right } => {
            let function_name = op.canonical_symbol()?;
            let arguments = vec![compile_condition(left)?, compile_condition(right)?];
            Ok(WireExpr::Function(FunctionExpr {
                function_name: function_name.to_string(),
                arguments,
            }))
        }
        // The name goes on the wire verbatim; schema validation is the
        // engine's job.
        ConditionExpr::Column(name) => Ok(WireExpr::Column(ColumnExpr::named(name.clone()))),
        ConditionExpr::Literal(literal) => compile_literal(literal),
        ConditionExpr::Paren(inner) => compile_condition(inner),
        unsupported @ (ConditionExpr::Unary { .. } | ConditionExpr::InList { .. }) => Err(
            CompileError::UnsupportedExpression(unsupported.describe()),
        ),
    }
}

/// Type hints are checked in fixed priority order: integer, then general
/// numeric, then string.
fn compile_literal(literal: &Literal) -> Result<WireExpr> {
    if literal.is_int {
        let value = literal
            .text
            .parse::<i64>()
            .map_err(|_| CompileError::LiteralParse {
                text: literal.text.clone(),
                target: "i64",
            })?;
        Ok(WireExpr::Constant(ConstantExpr::Int64(value)))
    } else if literal.is_number {
        let value = literal
            .text
            .parse::<f64>()
            .map_err(|_| CompileError::LiteralParse {
                text: literal.text.clone(),
                target: "f64",
            })?;
        Ok(WireExpr::Constant(ConstantExpr::Double(value)))
    } else if literal.is_string {
        Ok(WireExpr::Constant(ConstantExpr::String(
            literal.text.clone(),
        )))
    } else {
        Err(CompileError::UnrecognizedLiteralType(literal.text.clone()))
    }
}

/// Compile a projection list. The literal `*` marker selects all columns.
pub fn compile_select_list(columns: &[String]) -> Vec<WireExpr> {
    columns
        .iter()
        .map(|column| {
            if column == "*" {
                WireExpr::Column(ColumnExpr::star())
            } else {
                WireExpr::Column(ColumnExpr::named(column.clone()))
            }
        })
        .collect()
}

/// Compile a limit or offset value. Absent input stays absent so callers
/// skip the clause entirely instead of sending zero.
pub fn compile_paging(value: Option<i64>) -> Option<WireExpr> {
    value.map(|v| WireExpr::Constant(ConstantExpr::Int64(v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::{ConditionOp, UnaryOp};

    fn column(name: &str) -> ConditionExpr {
        ConditionExpr::column(name)
    }

    fn int_literal(text: &str) -> ConditionExpr {
        ConditionExpr::Literal(Literal::int(text))
    }

    fn wire_column(name: &str) -> WireExpr {
        WireExpr::Column(ColumnExpr::named(name))
    }

    fn wire_int(value: i64) -> WireExpr {
        WireExpr::Constant(ConstantExpr::Int64(value))
    }

    #[test]
    fn test_compile_binary_comparison() {
        let condition = ConditionExpr::binary(ConditionOp::Eq, column("age"), int_literal("30"));

        let compiled = compile_condition(&condition).unwrap();
        assert_eq!(
            compiled,
            WireExpr::Function(FunctionExpr {
                function_name: "=".to_string(),
                arguments: vec![wire_column("age"), wire_int(30)],
            })
        );
    }

    #[test]
    fn test_canonical_symbols_for_all_supported_operators() {
        let expected = [
            (ConditionOp::Eq, "="),
            (ConditionOp::Gt, ">"),
            (ConditionOp::Lt, "<"),
            (ConditionOp::GtEq, ">="),
            (ConditionOp::LtEq, "<="),
            (ConditionOp::NotEq, "!="),
            (ConditionOp::And, "and"),
            (ConditionOp::Or, "or"),
        ];

        for (op, symbol) in expected {
            let condition = ConditionExpr::binary(op, column("x"), int_literal("1"));
            match compile_condition(&condition).unwrap() {
                WireExpr::Function(function) => {
                    assert_eq!(function.function_name, symbol);
                    assert_eq!(function.arguments.len(), 2);
                    assert_eq!(function.arguments[0], wire_column("x"));
                    assert_eq!(function.arguments[1], wire_int(1));
                }
                other => panic!("expected a function expression, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_compile_nested_conjunction() {
        // x > 1 and x < 10
        let condition = ConditionExpr::binary(
            ConditionOp::And,
            ConditionExpr::binary(ConditionOp::Gt, column("x"), int_literal("1")),
            ConditionExpr::binary(ConditionOp::Lt, column("x"), int_literal("10")),
        );

        let compiled = compile_condition(&condition).unwrap();
        let WireExpr::Function(conjunction) = compiled else {
            panic!("expected a function expression");
        };
        assert_eq!(conjunction.function_name, "and");
        assert_eq!(
            conjunction.arguments[0],
            WireExpr::Function(FunctionExpr {
                function_name: ">".to_string(),
                arguments: vec![wire_column("x"), wire_int(1)],
            })
        );
        assert_eq!(
            conjunction.arguments[1],
            WireExpr::Function(FunctionExpr {
                function_name: "<".to_string(),
                arguments: vec![wire_column("x"), wire_int(10)],
            })
        );
    }

    #[test]
    fn test_paren_is_transparent() {
        let inner = ConditionExpr::binary(ConditionOp::GtEq, column("age"), int_literal("18"));
        let grouped = ConditionExpr::paren(inner.clone());

        assert_eq!(
            compile_condition(&grouped).unwrap(),
            compile_condition(&inner).unwrap()
        );
    }

    #[test]
    fn test_compile_column_and_star() {
        assert_eq!(compile_condition(&column("a")).unwrap(), wire_column("a"));

        let select_list = compile_select_list(&["*".to_string()]);
        assert_eq!(select_list, vec![WireExpr::Column(ColumnExpr::star())]);
        match &select_list[0] {
            WireExpr::Column(expr) => {
                assert!(expr.star);
                assert!(expr.column_names.is_empty());
            }
            other => panic!("expected a column expression, got {other:?}"),
        }
    }

    #[test]
    fn test_compile_select_list_named_columns() {
        let select_list = compile_select_list(&["age".to_string(), "score".to_string()]);
        assert_eq!(select_list, vec![wire_column("age"), wire_column("score")]);
    }

    #[test]
    fn test_compile_paging() {
        assert_eq!(compile_paging(Some(10)), Some(wire_int(10)));
        assert_eq!(compile_paging(None), None);
    }

    #[test]
    fn test_double_literal() {
        let condition = ConditionExpr::Literal(Literal::number("4.5"));
        assert_eq!(
            compile_condition(&condition).unwrap(),
            WireExpr::Constant(ConstantExpr::Double(4.5))
        );
    }

    #[test]
    fn test_string_literal() {
        let condition = ConditionExpr::Literal(Literal::string("alice"));
        assert_eq!(
            compile_condition(&condition).unwrap(),
            WireExpr::Constant(ConstantExpr::String("alice".to_string()))
        );
    }

    #[test]
    fn test_untyped_literal_is_rejected() {
        let condition = ConditionExpr::Literal(Literal::untyped("true"));
        assert!(matches!(
            compile_condition(&condition),
            Err(CompileError::UnrecognizedLiteralType(_))
        ));
    }

    #[test]
    fn test_malformed_integer_literal() {
        let condition = ConditionExpr::Literal(Literal::int("99999999999999999999999"));
        assert!(matches!(
            compile_condition(&condition),
            Err(CompileError::LiteralParse { target: "i64", .. })
        ));
    }

    #[test]
    fn test_like_operator_is_rejected() {
        let condition = ConditionExpr::binary(
            ConditionOp::Like,
            column("name"),
            ConditionExpr::Literal(Literal::string("a%")),
        );
        assert!(matches!(
            compile_condition(&condition),
            Err(CompileError::UnsupportedOperator(_))
        ));
    }

    #[test]
    fn test_unary_expression_is_rejected() {
        let condition = ConditionExpr::Unary {
            op: UnaryOp::Not,
            operand: Box::new(column("flag")),
        };
        assert!(matches!(
            compile_condition(&condition),
            Err(CompileError::UnsupportedExpression(_))
        ));
    }
}
