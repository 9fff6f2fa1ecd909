use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use tilestock_parties::{Customer, CustomerDraft};
use tilestock_store::RecordStore;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/:id", get(get_customer))
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<dto::ItemsResponse<Customer>>, ApiError> {
    let items = services.store().list_customers()?;
    Ok(Json(dto::ItemsResponse { items }))
}

pub async fn create_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<CustomerDraft>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = services.add_customer(body)?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn get_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(services.get_customer(&id)?))
}
