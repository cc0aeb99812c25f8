use axum::{
    debug_handler,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::{session::SessionUser, AppResult};

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

#[debug_handler]
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], include_res!(str, "/style.css"))
}

#[debug_handler]
pub async fn contact_form_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], include_res!(str, "/js/contact-form.js"))
}

/// 404 page used by the HTML routes; the JSON routes go through `AppError`.
pub fn not_found(message: &str) -> AppResult<Response> {
    let body = include_res!(str, "/pages/error.html")
        .replace("{message}", &escape(message));

    Ok((StatusCode::NOT_FOUND, Html(body)).into_response())
}

/// Header fragment shared by every page: a sign-in link, or the signed-in
/// identity with a logout link.
pub fn user_nav(user: Option<&SessionUser>) -> String {
    match user {
        Some(user) => format!(
            r#"<span class="user">{}</span> <a href="/logout">Log out</a>"#,
            escape(&user.name),
        ),
        None => r#"<a href="/auth/google">Sign in with Google</a>"#.to_owned(),
    }
}

pub fn escape(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_owned(),
            '<' => "&lt;".to_owned(),
            '>' => "&gt;".to_owned(),
            '"' => "&quot;".to_owned(),
            '\'' => "&#39;".to_owned(),
            c => c.to_string(),
        })
        .collect()
}
