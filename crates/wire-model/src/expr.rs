use serde::{Deserialize, Serialize};

/// Engine-side expression tree carried inside select requests.
///
/// Operator arguments already form an ordered tree, so there is no
/// grouping node; parenthesized client expressions compile straight into
/// their child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WireExpr {
    Function(FunctionExpr),
    Column(ColumnExpr),
    Constant(ConstantExpr),
}

/// Function application. For binary operators the name is the canonical
/// symbol (`=`, `>`, `<`, `>=`, `<=`, `!=`, `and`, `or`) and exactly two
/// arguments are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionExpr {
    pub function_name: String,
    pub arguments: Vec<WireExpr>,
}

/// Column reference. `star` selects all columns and carries no names;
/// otherwise exactly one name is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnExpr {
    pub star: bool,
    pub column_names: Vec<String>,
}

impl ColumnExpr {
    pub fn star() -> Self {
        ColumnExpr {
            star: true,
            column_names: Vec::new(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        ColumnExpr {
            star: false,
            column_names: vec![name.into()],
        }
    }
}

/// Scalar constant. The variant tag doubles as the wire literal type, so a
/// constant can never carry more than one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstantExpr {
    Int64(i64),
    Double(f64),
    String(String),
}
