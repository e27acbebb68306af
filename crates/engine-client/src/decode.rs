use crate::error::DecodeError;
use bytes::Buf;
use std::collections::HashMap;
use tracing::warn;
use wire_model::column::{ColumnDescriptor, ColumnField, ColumnType};
use wire_model::value::ColumnValues;

/// Decode every column of a select response into native value sequences.
///
/// Columns are processed in declaration order and the result map is
/// freshly allocated; the first failure aborts the whole call, so callers
/// never observe a partially-decoded response.
pub fn decode_columns(
    column_defs: &[ColumnDescriptor],
    column_fields: &HashMap<i64, ColumnField>,
) -> Result<HashMap<String, ColumnValues>, DecodeError> {
    let mut results = HashMap::with_capacity(column_defs.len());

    for descriptor in column_defs {
        let field =
            column_fields
                .get(&descriptor.id)
                .ok_or_else(|| DecodeError::MissingColumnField {
                    name: descriptor.name.clone(),
                    id: descriptor.id,
                })?;
        let values = decode_field(descriptor, field)?;
        results.insert(descriptor.name.clone(), values);
    }

    Ok(results)
}

fn decode_field(
    descriptor: &ColumnDescriptor,
    field: &ColumnField,
) -> Result<ColumnValues, DecodeError> {
    match field.column_type {
        ColumnType::Int32 => {
            let count = element_count(descriptor, field, 4)?;
            let mut buf = field.column_vector.clone();
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                values.push(buf.get_i32_le());
            }
            Ok(ColumnValues::Int32(values))
        }
        ColumnType::Int64 => {
            let count = element_count(descriptor, field, 8)?;
            let mut buf = field.column_vector.clone();
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                values.push(buf.get_i64_le());
            }
            Ok(ColumnValues::Int64(values))
        }
        ColumnType::Float32 => {
            let count = element_count(descriptor, field, 4)?;
            let mut buf = field.column_vector.clone();
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                values.push(buf.get_f32_le());
            }
            Ok(ColumnValues::Float32(values))
        }
        ColumnType::Float64 => {
            let count = element_count(descriptor, field, 8)?;
            let mut buf = field.column_vector.clone();
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                values.push(buf.get_f64_le());
            }
            Ok(ColumnValues::Float64(values))
        }
        other => {
            warn!(
                "No fixed-width decode for column type {:?} (column '{}')",
                other, descriptor.name
            );
            Err(DecodeError::UnsupportedColumnType {
                name: descriptor.name.clone(),
                column_type: other,
            })
        }
    }
}

/// Element count for a fixed-width buffer. A remainder means the payload
/// is malformed and must not be silently truncated.
fn element_count(
    descriptor: &ColumnDescriptor,
    field: &ColumnField,
    width: usize,
) -> Result<usize, DecodeError> {
    let len = field.column_vector.len();
    if len % width != 0 {
        return Err(DecodeError::MalformedColumnBuffer {
            name: descriptor.name.clone(),
            len,
            width,
        });
    }
    Ok(len / width)
}
