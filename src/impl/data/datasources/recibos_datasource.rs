use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde_json::Value;

/// Raw JSON backing store for the receipts list. Values are passed through
/// untouched; shape checks belong to the repository.
#[async_trait]
pub trait RecibosDatasource: Send + Sync {
    async fn read_value(&self) -> Result<Value, ServerError>;

    async fn write_value(&self, value: &Value) -> Result<(), ServerError>;
}
