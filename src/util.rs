use axum::Router;
use fractic_server_error::ServerError;

use crate::{
    config::RecibosConfig,
    endpoint::{build_router, AppState},
    repositories::{RecibosApiRepository, RecibosFileRepository},
    view_model::RecibosViewModel,
};

/// Entry points wiring the configuration to the two components.
pub struct RecibosUtil;

impl RecibosUtil {
    /// View-model talking to a running persistence endpoint at `base_url`.
    pub fn api_view_model(
        base_url: &str,
        config: &RecibosConfig,
    ) -> Result<RecibosViewModel<RecibosApiRepository>, ServerError> {
        RecibosViewModel::new(RecibosApiRepository::from_api(base_url), config)
    }

    /// View-model reading and writing the configured data file directly.
    pub fn file_view_model(
        config: &RecibosConfig,
    ) -> Result<RecibosViewModel<RecibosFileRepository>, ServerError> {
        RecibosViewModel::new(
            RecibosFileRepository::from_file(config.data_file.clone()),
            config,
        )
    }

    /// Persistence endpoint backed by the configured data file.
    pub fn router(config: &RecibosConfig) -> Router {
        build_router(AppState::new(config.data_file.clone()))
    }
}
