mod store;

use axum::{
    debug_handler,
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_sessions::Session;

use crate::{include_res, res, session, AppResult, AppState};

pub use store::{Message, MessageStore};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", get(page).post(submit))
}

#[debug_handler(state = AppState)]
async fn page(session: Session) -> AppResult<Response> {
    let user = session::current_user(&session).await?;

    let body = include_res!(str, "/pages/contact.html")
        .replace("{user_nav}", &res::user_nav(user.as_ref()));

    Ok(Html(body).into_response())
}

#[derive(Deserialize)]
struct ContactForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

#[debug_handler(state = AppState)]
async fn submit(
    State(messages): State<MessageStore>,
    Json(form): Json<ContactForm>,
) -> AppResult<Json<Value>> {
    let record = messages.append(&form.name, &form.email, &form.message).await?;
    tracing::info!(from = %record.email, "new message");

    Ok(Json(json!({ "success": true, "message": "Message received successfully!" })))
}
