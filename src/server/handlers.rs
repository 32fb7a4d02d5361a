use super::{error::DetailsError, types::DetailsRequest};
use crate::{Error, details, gemini::GenerationClient};
use axum::{
    body::{Body, to_bytes},
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub api_key: Option<String>,
    pub client: Arc<dyn GenerationClient>,
}

impl AppState {
    pub fn new(api_key: Option<String>, client: Arc<dyn GenerationClient>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
            client,
        }
    }
}

/// Single endpoint: validates the request, asks the model for restaurant
/// details and relays its raw response.
///
/// Routed for every method so that non-POST requests get a plain 405. The
/// body is taken unread so no extractor limit can answer before the method
/// guard does.
pub async fn get_details(
    State(state): State<AppState>,
    method: Method,
    body: Body,
) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!("get_details", %request_id);

    match fetch_details(&state, &method, body).instrument(span).await {
        Ok(details) => (StatusCode::OK, Json(details)).into_response(),
        Err(e) => {
            match &e {
                err if err.is_client_error() => {
                    debug!(%request_id, "Rejected client request: {}", err)
                }
                DetailsError::Unexpected(message) => {
                    error!(%request_id, "Details request failed: {}", message)
                }
                DetailsError::Upstream { status } => {
                    warn!(%request_id, "Relaying upstream status {}", status)
                }
                _ => warn!(%request_id, "Rejecting request: API key not configured"),
            }
            e.into_response()
        }
    }
}

/// Guards run in order and the first failing one wins: method, body, name,
/// then credential. The outbound call happens only after all of them pass.
async fn fetch_details(
    state: &AppState,
    method: &Method,
    body: Body,
) -> Result<Value, DetailsError> {
    if method != Method::POST {
        return Err(DetailsError::MethodNotAllowed);
    }

    let body = to_bytes(body, usize::MAX)
        .await
        .map_err(|e| DetailsError::Unexpected(e.to_string()))?;
    let payload: Value = serde_json::from_slice(&body).map_err(Error::from)?;
    let request = DetailsRequest::from_json(&payload).ok_or(DetailsError::MissingName)?;

    let api_key = state
        .api_key
        .as_deref()
        .ok_or(DetailsError::MissingApiKey)?;

    info!("Fetching details for restaurant: {}", request.name);

    let outbound = details::build_request(&request.name);
    let details = state.client.generate_content(api_key, &outbound).await?;

    Ok(details)
}
