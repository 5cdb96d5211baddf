use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use fractic_server_error::ServerError;

use crate::{
    domain::{logic::recibo_factory::ReciboFactory, repositories::recibos_repository::RecibosRepository},
    entities::{NuevoRecibo, Recibo},
    errors::MissingRequiredField,
};

#[async_trait]
pub trait RecibosUsecase: Send + Sync {
    async fn load(&self) -> Result<Vec<Recibo>, ServerError>;

    /// New list with the submitted receipt appended. Nothing is persisted.
    fn append(&self, current: &[Recibo], form: NuevoRecibo) -> Result<Vec<Recibo>, ServerError>;

    /// New list without any receipt whose id equals `id`. Nothing is persisted.
    fn remove(&self, current: &[Recibo], id: &str) -> Vec<Recibo>;

    async fn persist(&self, recibos: &[Recibo]) -> Result<(), ServerError>;
}

pub(crate) struct RecibosUsecaseImpl<R>
where
    R: RecibosRepository,
{
    repository: R,
    factory: ReciboFactory,
}

impl<R> RecibosUsecaseImpl<R>
where
    R: RecibosRepository,
{
    pub(crate) fn new(repository: R, numero_prefix: &str) -> Self {
        Self {
            repository,
            factory: ReciboFactory::new(numero_prefix),
        }
    }

    pub(crate) fn append_on(
        &self,
        current: &[Recibo],
        form: NuevoRecibo,
        fecha: NaiveDate,
    ) -> Result<Vec<Recibo>, ServerError> {
        if let Some(field) = form.missing_field() {
            return Err(MissingRequiredField::new(field));
        }
        let recibo = self.factory.build(form, fecha, current);
        let mut updated = current.to_vec();
        updated.push(recibo);
        Ok(updated)
    }
}

#[async_trait]
impl<R> RecibosUsecase for RecibosUsecaseImpl<R>
where
    R: RecibosRepository,
{
    async fn load(&self) -> Result<Vec<Recibo>, ServerError> {
        self.repository.fetch_all().await
    }

    fn append(&self, current: &[Recibo], form: NuevoRecibo) -> Result<Vec<Recibo>, ServerError> {
        self.append_on(current, form, Utc::now().date_naive())
    }

    fn remove(&self, current: &[Recibo], id: &str) -> Vec<Recibo> {
        current.iter().filter(|r| r.id.0 != id).cloned().collect()
    }

    async fn persist(&self, recibos: &[Recibo]) -> Result<(), ServerError> {
        self.repository.save_all(recibos).await
    }
}
