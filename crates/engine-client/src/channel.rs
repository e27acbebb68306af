use crate::error::ChannelError;
use async_trait::async_trait;
use wire_model::request::{
    CreateIndexRequest, DropIndexRequest, ImportRequest, InsertRequest, SelectRequest,
};
use wire_model::response::SelectResponse;

/// RPC boundary to the remote engine.
///
/// Implementations own connection handling and message encoding; callers
/// hand over fully-built request messages and consume typed responses.
#[async_trait]
pub trait EngineChannel: Send + Sync {
    async fn select(&self, request: SelectRequest) -> Result<SelectResponse, ChannelError>;

    async fn create_index(&self, request: CreateIndexRequest) -> Result<(), ChannelError>;

    async fn drop_index(&self, request: DropIndexRequest) -> Result<(), ChannelError>;

    async fn insert(&self, request: InsertRequest) -> Result<(), ChannelError>;

    async fn import_data(&self, request: ImportRequest) -> Result<(), ChannelError>;
}
