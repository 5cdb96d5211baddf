use std::{path::PathBuf, sync::Arc};

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{on, MethodFilter},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::data::datasources::{
    recibos_api_datasource::RECIBOS_PATH, recibos_datasource::RecibosDatasource,
    recibos_json_datasource::RecibosJsonDatasourceImpl,
};

const READ_ERROR_MESSAGE: &str = "Error reading recibos";
const SAVE_ERROR_MESSAGE: &str = "Error saving recibos";
const SAVE_OK_MESSAGE: &str = "Recibos saved successfully";

#[derive(Clone)]
pub struct AppState {
    datasource: Arc<RecibosJsonDatasourceImpl>,
}

impl AppState {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            datasource: Arc::new(RecibosJsonDatasourceImpl::new(data_file)),
        }
    }
}

/// `/api/recibos`: GET returns the stored document, POST replaces it with the
/// request body as-is. Any other method, HEAD included, is answered with 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            RECIBOS_PATH,
            // An explicit HEAD route keeps `get` from answering HEAD itself.
            on(MethodFilter::HEAD, method_not_allowed)
                .get(get_recibos)
                .post(save_recibos)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

fn message(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

async fn get_recibos(State(state): State<AppState>) -> Response {
    match state.datasource.read_value().await {
        Ok(recibos) => (StatusCode::OK, Json(recibos)).into_response(),
        Err(e) => {
            error!(error = ?e, path = %state.datasource.path().display(), "reading recibos failed");
            message(StatusCode::INTERNAL_SERVER_ERROR, READ_ERROR_MESSAGE)
        }
    }
}

async fn save_recibos(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    if !body.is_array() {
        warn!("storing non-array recibos document");
    }
    match state.datasource.write_value(&body).await {
        Ok(()) => {
            info!(
                count = body.as_array().map(Vec::len),
                "recibos saved"
            );
            message(StatusCode::OK, SAVE_OK_MESSAGE)
        }
        Err(e) => {
            error!(error = ?e, path = %state.datasource.path().display(), "saving recibos failed");
            message(StatusCode::INTERNAL_SERVER_ERROR, SAVE_ERROR_MESSAGE)
        }
    }
}

async fn method_not_allowed(method: Method) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET, POST")],
        format!("Method {} Not Allowed", method),
    )
        .into_response()
}
