mod callback;
mod client;
mod login;
mod logout;

use axum::{routing::get, Router};

use crate::AppState;

pub use client::GoogleClient;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/google", get(login::login))
        .route("/auth/google/callback", get(callback::callback))
        .route("/logout", get(logout::logout))
}
