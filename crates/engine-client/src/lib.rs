//! Client surface for a remote columnar engine: a channel seam for the
//! RPC transport, a table handle, a fluent query builder and the columnar
//! response decoder.

pub mod channel;
pub mod decode;
pub mod error;
pub mod query;
pub mod table;

pub use channel::EngineChannel;
pub use decode::decode_columns;
pub use error::{ChannelError, ClientError, DecodeError};
pub use query::QueryBuilder;
pub use table::Table;
