use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, routing::get, Json, Router};

use tilestock_purchasing::Purchase;
use tilestock_store::RecordStore;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_purchases).post(record_purchase))
        .route("/detailed", get(list_purchase_rows))
}

pub async fn list_purchases(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<dto::ItemsResponse<Purchase>>, ApiError> {
    let items = services.store().list_purchases()?;
    Ok(Json(dto::ItemsResponse { items }))
}

pub async fn list_purchase_rows(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<dto::ItemsResponse<dto::PurchaseRow>>, ApiError> {
    let items = services.purchase_rows()?;
    Ok(Json(dto::ItemsResponse { items }))
}

pub async fn record_purchase(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreatePurchaseRequest>,
) -> Result<(StatusCode, Json<dto::PurchaseRecordedResponse>), ApiError> {
    let recorded = services.record_purchase(body)?;
    Ok((
        StatusCode::CREATED,
        Json(dto::PurchaseRecordedResponse {
            purchase: recorded.record,
            stock_adjustment: recorded.stock_adjustment,
        }),
    ))
}
