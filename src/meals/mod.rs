mod dto;
pub mod handlers;
mod repo;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_meals).post(handlers::create_meal))
        .route("/metrics", get(handlers::metrics))
        .route(
            "/:id",
            get(handlers::get_meal)
                .put(handlers::update_meal)
                .delete(handlers::delete_meal),
        )
}
