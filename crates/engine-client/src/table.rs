use crate::channel::EngineChannel;
use crate::error::ClientError;
use crate::query::QueryBuilder;
use tracing::debug;
use wire_model::expr::ConstantExpr;
use wire_model::request::{
    CreateIndexRequest, DropIndexRequest, ImportOptions, ImportRequest, InitParameter,
    InsertRequest, RowField,
};
use wire_model::value::RowValue;

/// Handle to one remote table, scoped to a database.
///
/// Every operation builds a wire request and hands it to the channel;
/// nothing is cached or validated locally.
pub struct Table<C: EngineChannel> {
    channel: C,
    db_name: String,
    table_name: String,
}

impl<C: EngineChannel> Table<C> {
    pub fn new(channel: C, db_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Table {
            channel,
            db_name: db_name.into(),
            table_name: table_name.into(),
        }
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Start a query over this table; selects all columns by default.
    pub fn search(&self) -> QueryBuilder<'_, C> {
        QueryBuilder::new(&self.channel, &self.db_name, &self.table_name)
    }

    /// Create an index over the given columns. Names arrive user-supplied
    /// and are trimmed before they go on the wire; parameter values are
    /// stringified the way the engine expects them.
    pub async fn create_index(
        &self,
        index_name: &str,
        column_names: &[&str],
        method_type: &str,
        parameters: &[(&str, RowValue)],
    ) -> Result<(), ClientError> {
        let request = CreateIndexRequest {
            db_name: self.db_name.clone(),
            table_name: self.table_name.clone(),
            index_name: index_name.trim().to_string(),
            column_names: column_names
                .iter()
                .map(|name| name.trim().to_string())
                .collect(),
            method_type: method_type.trim().to_string(),
            parameters: parameters
                .iter()
                .map(|(name, value)| InitParameter {
                    para_name: (*name).to_string(),
                    para_value: value.to_string(),
                })
                .collect(),
        };

        debug!(
            "Creating index '{}' on {}.{}",
            request.index_name, request.db_name, request.table_name
        );
        self.channel.create_index(request).await?;
        Ok(())
    }

    pub async fn drop_index(&self, index_name: &str) -> Result<(), ClientError> {
        let request = DropIndexRequest {
            db_name: self.db_name.clone(),
            table_name: self.table_name.clone(),
            index_name: index_name.trim().to_string(),
        };

        self.channel.drop_index(request).await?;
        Ok(())
    }

    /// Insert rows of native values. Column names are taken from the
    /// first row; every row must list its values in the same order.
    pub async fn insert(&self, rows: &[Vec<(String, RowValue)>]) -> Result<(), ClientError> {
        let column_names: Vec<String> = rows
            .first()
            .map(|row| row.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default();

        let fields = rows
            .iter()
            .map(|row| RowField {
                values: row.iter().map(|(_, value)| ConstantExpr::from(value)).collect(),
            })
            .collect();

        let request = InsertRequest {
            db_name: self.db_name.clone(),
            table_name: self.table_name.clone(),
            column_names,
            fields,
        };

        debug!(
            "Inserting {} rows into {}.{}",
            request.fields.len(),
            request.db_name,
            request.table_name
        );
        self.channel.insert(request).await?;
        Ok(())
    }

    /// Ask the engine to bulk-load a file it can reach into this table.
    pub async fn import_data(
        &self,
        file_path: &str,
        options: Option<ImportOptions>,
    ) -> Result<(), ClientError> {
        let request = ImportRequest {
            db_name: self.db_name.clone(),
            table_name: self.table_name.clone(),
            file_path: file_path.to_string(),
            options,
        };

        self.channel.import_data(request).await?;
        Ok(())
    }
}
