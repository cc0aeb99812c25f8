mod api;
mod page;
mod store;

use axum::{routing::get, Router};

use crate::AppState;

pub use page::{detail, index};
pub use store::CourseStore;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(api::list))
        .route("/courses/{id}", get(api::detail))
}
