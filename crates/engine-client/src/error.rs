use thiserror::Error;
use wire_model::column::ColumnType;

/// Failures reported by an `EngineChannel` implementation.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Engine error {code}: {message}")]
    Engine { code: i64, message: String },
}

/// Failures while turning a columnar response into native values. Any of
/// these aborts the whole decode; no partial result is returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Column tag outside the fixed-width numeric set.
    #[error("Unsupported column type {column_type:?} for column '{name}'")]
    UnsupportedColumnType { name: String, column_type: ColumnType },

    /// Buffer length that is not a multiple of the element width.
    #[error("Malformed buffer for column '{name}': {len} bytes is not a multiple of {width}")]
    MalformedColumnBuffer {
        name: String,
        len: usize,
        width: usize,
    },

    /// Descriptor whose id has no buffer in the response.
    #[error("Response has no buffer for column '{name}' (id {id})")]
    MissingColumnField { name: String, id: i64 },
}

/// Umbrella error surfaced by table and query operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Compile error: {0}")]
    Compile(#[from] expression_compiler::CompileError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}
