use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod icons;
pub mod page;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(page::index))
        .route("/api/identify", post(handlers::identify))
        .route("/api/ask", post(handlers::ask))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use petal_core::{Classifier, Error, Prediction, Result, TextModel};
}
