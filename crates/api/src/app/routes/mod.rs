use axum::{routing::get, Router};

pub mod customers;
pub mod dashboard;
pub mod descriptions;
pub mod purchases;
pub mod sales;
pub mod system;
pub mod tiles;

/// Router for all record endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/dashboard", get(dashboard::get_summary))
        .nest("/tiles", tiles::router())
        .nest("/customers", customers::router())
        .nest("/sales", sales::router())
        .nest("/purchases", purchases::router())
        .nest("/descriptions", descriptions::router())
}
