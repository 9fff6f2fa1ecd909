use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use tilestock_store::RecordStore;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_tiles).post(create_tile))
        .route("/:id", get(get_tile))
}

pub async fn list_tiles(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<dto::ItemsResponse<dto::TileResponse>>, ApiError> {
    let items = services
        .store()
        .list_tiles()?
        .into_iter()
        .map(dto::TileResponse::from)
        .collect();
    Ok(Json(dto::ItemsResponse { items }))
}

pub async fn create_tile(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateTileRequest>,
) -> Result<(StatusCode, Json<dto::TileResponse>), ApiError> {
    let tile = services.add_tile(body)?;
    Ok((StatusCode::CREATED, Json(tile.into())))
}

pub async fn get_tile(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<dto::TileResponse>, ApiError> {
    Ok(Json(services.get_tile(&id)?.into()))
}
