use crate::channel::EngineChannel;
use crate::decode::decode_columns;
use crate::error::ClientError;
use expression_compiler::{compile_condition, compile_paging, compile_select_list, parse_filter};
use std::collections::HashMap;
use tracing::debug;
use wire_model::request::SelectRequest;
use wire_model::value::ColumnValues;

/// Fluent query over one table.
///
/// Finishing the builder compiles the pieces into a `SelectRequest`,
/// hands it to the channel and decodes the columnar response. Clauses
/// that were never set stay off the request entirely.
pub struct QueryBuilder<'a, C: EngineChannel> {
    channel: &'a C,
    db_name: &'a str,
    table_name: &'a str,
    columns: Vec<String>,
    filter: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl<'a, C: EngineChannel> QueryBuilder<'a, C> {
    pub(crate) fn new(channel: &'a C, db_name: &'a str, table_name: &'a str) -> Self {
        QueryBuilder {
            channel,
            db_name,
            table_name,
            columns: vec!["*".to_string()],
            filter: None,
            limit: None,
            offset: None,
        }
    }

    /// Replace the projection; the default selects all columns.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Build the wire request for the current builder state.
    pub fn build_request(&self) -> Result<SelectRequest, ClientError> {
        let where_expr = match self.filter.as_deref() {
            Some(filter) => Some(compile_condition(&parse_filter(filter)?)?),
            None => None,
        };

        Ok(SelectRequest {
            db_name: self.db_name.to_string(),
            table_name: self.table_name.to_string(),
            select_list: compile_select_list(&self.columns),
            where_expr,
            limit_expr: compile_paging(self.limit),
            offset_expr: compile_paging(self.offset),
        })
    }

    /// Execute the query and decode the columnar response.
    pub async fn fetch(self) -> Result<HashMap<String, ColumnValues>, ClientError> {
        let request = self.build_request()?;
        debug!(
            "Executing select on {}.{}",
            request.db_name, request.table_name
        );

        let response = self.channel.select(request).await?;
        let results = decode_columns(&response.column_defs, &response.column_fields)?;
        Ok(results)
    }
}
