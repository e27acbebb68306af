use crate::column::ColumnType;
use crate::expr::ConstantExpr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoded values for one result column. Always freshly allocated,
/// independent of the response buffer they were read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnValues {
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Int32(values) => values.len(),
            ColumnValues::Int64(values) => values.len(),
            ColumnValues::Float32(values) => values.len(),
            ColumnValues::Float64(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnValues::Int32(_) => ColumnType::Int32,
            ColumnValues::Int64(_) => ColumnType::Int64,
            ColumnValues::Float32(_) => ColumnType::Float32,
            ColumnValues::Float64(_) => ColumnType::Float64,
        }
    }
}

/// Native scalar handed to `insert`; converts into the wire constant the
/// engine expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RowValue {
    Int(i64),
    Float(f64),
    String(String),
}

impl From<i64> for RowValue {
    fn from(value: i64) -> Self {
        RowValue::Int(value)
    }
}

impl From<f64> for RowValue {
    fn from(value: f64) -> Self {
        RowValue::Float(value)
    }
}

impl From<&str> for RowValue {
    fn from(value: &str) -> Self {
        RowValue::String(value.to_string())
    }
}

impl From<String> for RowValue {
    fn from(value: String) -> Self {
        RowValue::String(value)
    }
}

impl From<&RowValue> for ConstantExpr {
    fn from(value: &RowValue) -> Self {
        match value {
            RowValue::Int(v) => ConstantExpr::Int64(*v),
            RowValue::Float(v) => ConstantExpr::Double(*v),
            RowValue::String(v) => ConstantExpr::String(v.clone()),
        }
    }
}

impl fmt::Display for RowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowValue::Int(v) => write!(f, "{v}"),
            RowValue::Float(v) => write!(f, "{v}"),
            RowValue::String(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_value_to_constant() {
        assert_eq!(
            ConstantExpr::from(&RowValue::Int(42)),
            ConstantExpr::Int64(42)
        );
        assert_eq!(
            ConstantExpr::from(&RowValue::Float(2.5)),
            ConstantExpr::Double(2.5)
        );
        assert_eq!(
            ConstantExpr::from(&RowValue::from("hello")),
            ConstantExpr::String("hello".to_string())
        );
    }

    #[test]
    fn test_row_value_display() {
        assert_eq!(format!("{}", RowValue::Int(16)), "16");
        assert_eq!(format!("{}", RowValue::Float(0.5)), "0.5");
        assert_eq!(format!("{}", RowValue::from("ip_sq8")), "ip_sq8");
    }

    #[test]
    fn test_column_values_len_and_type() {
        let values = ColumnValues::Float32(vec![1.0, 2.0, 3.0]);
        assert_eq!(values.len(), 3);
        assert!(!values.is_empty());
        assert_eq!(values.column_type(), ColumnType::Float32);
    }
}
