use crate::expr::{ConstantExpr, WireExpr};
use serde::{Deserialize, Serialize};

/// Select request assembled by the query builder. Absent clauses stay
/// `None` and are never encoded as zero values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectRequest {
    pub db_name: String,
    pub table_name: String,
    pub select_list: Vec<WireExpr>,
    pub where_expr: Option<WireExpr>,
    pub limit_expr: Option<WireExpr>,
    pub offset_expr: Option<WireExpr>,
}

/// Key/value pair configuring an index method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitParameter {
    pub para_name: String,
    pub para_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIndexRequest {
    pub db_name: String,
    pub table_name: String,
    pub index_name: String,
    pub column_names: Vec<String>,
    pub method_type: String,
    pub parameters: Vec<InitParameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropIndexRequest {
    pub db_name: String,
    pub table_name: String,
    pub index_name: String,
}

/// One row of constants, listed in `column_names` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowField {
    pub values: Vec<ConstantExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertRequest {
    pub db_name: String,
    pub table_name: String,
    pub column_names: Vec<String>,
    pub fields: Vec<RowField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    Csv,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportOptions {
    pub file_type: FileType,
    pub header: bool,
    pub delimiter: char,
}

impl Default for ImportOptions {
    fn default() -> Self {
        ImportOptions {
            file_type: FileType::Csv,
            header: false,
            delimiter: ',',
        }
    }
}

/// Ask the engine to bulk-load a file it can reach into a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRequest {
    pub db_name: String,
    pub table_name: String,
    pub file_path: String,
    pub options: Option<ImportOptions>,
}
