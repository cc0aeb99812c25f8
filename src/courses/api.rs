use axum::{
    debug_handler,
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::{AppResult, AppState};

use super::store::CourseStore;

#[debug_handler(state = AppState)]
pub(crate) async fn list(State(courses): State<CourseStore>) -> AppResult<Json<Vec<Value>>> {
    Ok(Json(courses.all().await?))
}

#[debug_handler(state = AppState)]
pub(crate) async fn detail(
    Path(id): Path<String>,
    State(courses): State<CourseStore>,
) -> AppResult<Json<Value>> {
    Ok(Json(courses.get(&id).await?))
}
