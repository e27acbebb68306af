use crate::column::{ColumnDescriptor, ColumnField};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Columnar payload of a select call: descriptors in declaration order
/// plus the buffers they point at, keyed by column id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectResponse {
    pub column_defs: Vec<ColumnDescriptor>,
    pub column_fields: HashMap<i64, ColumnField>,
}
