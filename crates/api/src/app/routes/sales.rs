use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, routing::get, Json, Router};

use tilestock_sales::Sale;
use tilestock_store::RecordStore;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_sales).post(record_sale))
        .route("/detailed", get(list_sale_rows))
}

pub async fn list_sales(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<dto::ItemsResponse<Sale>>, ApiError> {
    let items = services.store().list_sales()?;
    Ok(Json(dto::ItemsResponse { items }))
}

pub async fn list_sale_rows(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<dto::ItemsResponse<dto::SaleRow>>, ApiError> {
    let items = services.sale_rows()?;
    Ok(Json(dto::ItemsResponse { items }))
}

/// Record a sale. An unknown tile id is accepted; the response says stock was not touched.
pub async fn record_sale(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateSaleRequest>,
) -> Result<(StatusCode, Json<dto::SaleRecordedResponse>), ApiError> {
    let recorded = services.record_sale(body)?;
    Ok((
        StatusCode::CREATED,
        Json(dto::SaleRecordedResponse {
            sale: recorded.record,
            stock_adjustment: recorded.stock_adjustment,
        }),
    ))
}
