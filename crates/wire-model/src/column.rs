use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Column type tags as declared by the engine in a select response. Only
/// the fixed-width numeric tags have a client-side decode path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Varchar,
    Embedding,
}

/// Pairs a result column's name with the id locating its buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub id: i64,
}

/// Raw typed payload for one result column: a dense array of fixed-width
/// scalars in little-endian byte order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnField {
    pub column_type: ColumnType,
    pub column_vector: Bytes,
}
