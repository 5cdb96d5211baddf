use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    data::datasources::recibos_datasource::RecibosDatasource,
    errors::{ApiRequestFailed, ApiUnexpectedStatus, InvalidJson},
};

pub(crate) const RECIBOS_PATH: &str = "/api/recibos";

/// The persistence endpoint, reached over HTTP.
pub struct RecibosApiDatasourceImpl {
    client: reqwest::Client,
    endpoint: String,
}

impl RecibosApiDatasourceImpl {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), RECIBOS_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn check_status(&self, response: &reqwest::Response) -> Result<(), ServerError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiUnexpectedStatus::new(
                &self.endpoint,
                response.status().as_u16(),
            ))
        }
    }
}

#[async_trait]
impl RecibosDatasource for RecibosApiDatasourceImpl {
    async fn read_value(&self) -> Result<Value, ServerError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| ApiRequestFailed::with_debug(&self.endpoint, &e))?;
        self.check_status(&response)?;
        response
            .json::<Value>()
            .await
            .map_err(|e| InvalidJson::with_debug(&e))
    }

    async fn write_value(&self, value: &Value) -> Result<(), ServerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(value)
            .send()
            .await
            .map_err(|e| ApiRequestFailed::with_debug(&self.endpoint, &e))?;
        self.check_status(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url() {
        assert_eq!(
            RecibosApiDatasourceImpl::new("http://localhost:3000/").endpoint(),
            "http://localhost:3000/api/recibos"
        );
        assert_eq!(
            RecibosApiDatasourceImpl::new("http://localhost:3000").endpoint(),
            "http://localhost:3000/api/recibos"
        );
    }
}
