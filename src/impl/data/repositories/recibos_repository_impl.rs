use std::path::PathBuf;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::{
            recibos_api_datasource::RecibosApiDatasourceImpl,
            recibos_datasource::RecibosDatasource,
            recibos_json_datasource::RecibosJsonDatasourceImpl,
        },
        models::recibo_model::ReciboModel,
    },
    domain::repositories::recibos_repository::RecibosRepository,
    entities::Recibo,
    errors::InvalidJson,
};

pub struct RecibosRepositoryImpl<DS>
where
    DS: RecibosDatasource,
{
    datasource: DS,
}

/// Receipts stored directly in a local JSON file.
pub type RecibosFileRepository = RecibosRepositoryImpl<RecibosJsonDatasourceImpl>;

/// Receipts stored behind the persistence endpoint.
pub type RecibosApiRepository = RecibosRepositoryImpl<RecibosApiDatasourceImpl>;

#[async_trait]
impl<DS> RecibosRepository for RecibosRepositoryImpl<DS>
where
    DS: RecibosDatasource,
{
    async fn fetch_all(&self) -> Result<Vec<Recibo>, ServerError> {
        let value = self.datasource.read_value().await?;
        let models: Vec<ReciboModel> =
            serde_json::from_value(value).map_err(|e| InvalidJson::with_debug(&e))?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn save_all(&self, recibos: &[Recibo]) -> Result<(), ServerError> {
        let models: Vec<ReciboModel> = recibos.iter().map(ReciboModel::from).collect();
        let value = serde_json::to_value(&models).map_err(|e| InvalidJson::with_debug(&e))?;
        self.datasource.write_value(&value).await
    }
}

impl<DS> RecibosRepositoryImpl<DS>
where
    DS: RecibosDatasource,
{
    pub fn with_datasource(datasource: DS) -> Self {
        Self { datasource }
    }
}

impl RecibosRepositoryImpl<RecibosJsonDatasourceImpl> {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::with_datasource(RecibosJsonDatasourceImpl::new(path))
    }
}

impl RecibosRepositoryImpl<RecibosApiDatasourceImpl> {
    pub fn from_api(base_url: &str) -> Self {
        Self::with_datasource(RecibosApiDatasourceImpl::new(base_url))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;
    use crate::entities::ReciboId;

    fn recibo(id: &str) -> Recibo {
        Recibo {
            id: ReciboId(id.into()),
            fecha: "2024-05-01".into(),
            numero: "SANGL-2024-12345".into(),
            recibido_de: "Juan Perez".into(),
            suma: "100".into(),
            forma_pago: "efectivo".into(),
            concepto: "Inscripción".into(),
            saldo: "0".into(),
        }
    }

    #[tokio::test]
    async fn save_then_fetch_preserves_order() {
        let dir = tempdir().expect("tempdir");
        let repo = RecibosFileRepository::from_file(dir.path().join("recibos.json"));
        let recibos = vec![recibo("b"), recibo("a"), recibo("c")];
        repo.save_all(&recibos).await.expect("save");
        assert_eq!(repo.fetch_all().await.expect("fetch"), recibos);
    }

    #[tokio::test]
    async fn entry_missing_a_key_does_not_drop_the_list() {
        let dir = tempdir().expect("tempdir");
        let ds = RecibosJsonDatasourceImpl::new(dir.path().join("recibos.json"));
        let mut partial = serde_json::to_value(ReciboModel::from(&recibo("b"))).unwrap();
        partial.as_object_mut().unwrap().remove("saldo");
        let full = serde_json::to_value(ReciboModel::from(&recibo("a"))).unwrap();
        ds.write_value(&json!([full, partial])).await.expect("write");

        let repo = RecibosRepositoryImpl::with_datasource(ds);
        let fetched = repo.fetch_all().await.expect("fetch");
        assert_eq!(fetched.len(), 2);
        assert_eq!(fetched[0], recibo("a"));
        assert_eq!(fetched[1].id, ReciboId("b".into()));
        assert_eq!(fetched[1].saldo, "");

        // Saving back keeps both entries.
        repo.save_all(&fetched).await.expect("save");
        assert_eq!(repo.fetch_all().await.expect("fetch").len(), 2);
    }

    #[tokio::test]
    async fn non_list_document_fails_to_load() {
        let dir = tempdir().expect("tempdir");
        let ds = RecibosJsonDatasourceImpl::new(dir.path().join("recibos.json"));
        ds.write_value(&json!({"not": "a list"})).await.expect("write");
        let repo = RecibosRepositoryImpl::with_datasource(ds);
        assert!(repo.fetch_all().await.is_err());
    }
}
