use super::state::{classify_response, SubmitError, SubmitOutcome};
use crate::shared::api_utils::api_url;
use contracts::domain::a001_product::aggregate::ProductDto;
use contracts::shared::http_status::INVALID_REQUEST_STATUS;
use gloo_net::http::Request;

/// POST /api/products
///
/// No timeout and no retry; any transport failure is a connection error.
pub async fn save_product(dto: &ProductDto) -> Result<SubmitOutcome, SubmitError> {
    let response = Request::post(&api_url("/api/products"))
        .json(dto)
        .map_err(|e| {
            log::warn!("Failed to serialize product: {}", e);
            SubmitError::Connection
        })?
        .send()
        .await
        .map_err(|e| {
            log::warn!("Failed to send request: {}", e);
            SubmitError::Connection
        })?;

    let status = response.status();
    let body = if !response.ok() && status == INVALID_REQUEST_STATUS {
        match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                log::warn!("Failed to read error body: {}", e);
                None
            }
        }
    } else {
        None
    };

    classify_response(status, response.ok(), body.as_deref())
}
