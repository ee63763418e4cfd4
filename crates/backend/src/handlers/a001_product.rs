use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::domain::a001_product::aggregate::{
    ApiErrorBody, CreateProductResponse, ProductDto, ProductId,
};
use contracts::domain::a001_product::validation;
use thiserror::Error;

use crate::shared::config::ProductsConfig;

#[derive(Debug, Error)]
pub enum ProductApiError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Unexpected error")]
    Internal,
}

impl IntoResponse for ProductApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ProductApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProductApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ApiErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// POST /api/products
///
/// Validates and acknowledges the product; nothing is stored.
pub async fn create(
    State(settings): State<ProductsConfig>,
    Json(dto): Json<ProductDto>,
) -> Result<(StatusCode, Json<CreateProductResponse>), ProductApiError> {
    if settings.server_error {
        tracing::warn!("products.server_error is enabled, rejecting request");
        return Err(ProductApiError::Internal);
    }

    validation::validate(&dto).map_err(|message| {
        tracing::info!("Invalid product request: {}", message);
        ProductApiError::InvalidRequest(message)
    })?;

    let id = ProductId::new_v4();
    tracing::info!(
        "Product created: id={} name={:?} size={:?} type={:?}",
        id.as_string(),
        dto.name,
        dto.size,
        dto.product_type
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse { id: id.as_string() }),
    ))
}
