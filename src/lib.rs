pub mod auth;
pub mod config;
pub mod contact;
pub mod courses;
pub mod res;
pub mod session;

mod appresult;

pub use appresult::{AppError, AppResult};

use std::sync::Arc;

use axum::{extract::FromRef, response::Redirect, routing::get, Router};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use auth::GoogleClient;
use config::Config;
use contact::MessageStore;
use courses::CourseStore;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<Config>,
    pub courses: CourseStore,
    pub messages: MessageStore,
    pub oauth: GoogleClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<AppState> {
        let courses = CourseStore::new(&config.courses_path, &config.courses_dir);
        let messages = MessageStore::new(&config.messages_path);
        let oauth = GoogleClient::from_config(&config)?;

        Ok(AppState {
            config: Arc::new(config),
            courses,
            messages,
            oauth,
        })
    }
}

pub fn app(state: AppState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_signed(state.config.session_key())
        .with_secure(state.config.production)
        .with_same_site(if state.config.production { SameSite::None } else { SameSite::Lax })
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    Router::new()
        .route("/", get(courses::index))
        .route("/courses", get(|| async { Redirect::to("/") }))
        .route("/course/{id}", get(courses::detail))
        .route("/style.css", get(res::stylesheet))
        .route("/js/contact-form.js", get(res::contact_form_js))

        .nest("/api", courses::api_router())
        .merge(contact::router())
        .merge(auth::router())

        .with_state(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
}

pub trait GetField {
    fn get_str_field(&self, field: &str) -> AppResult<String>;
}

impl GetField for Value {
    fn get_str_field(&self, field: &str) -> AppResult<String> {
        Ok(
            self.get(field)
            .ok_or_else(|| anyhow::anyhow!("expected {field} in response"))?
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("expected {field} to be a string"))?
            .to_owned()
        )
    }
}
