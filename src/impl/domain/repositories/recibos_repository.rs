use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::Recibo;

/// Whole-list access to the persisted receipts. There is no partial update:
/// `save_all` always replaces everything.
#[async_trait]
pub trait RecibosRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Recibo>, ServerError>;

    async fn save_all(&self, recibos: &[Recibo]) -> Result<(), ServerError>;
}
