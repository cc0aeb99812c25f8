use axum::{debug_handler, extract::{Query, State}, response::Redirect};
use oauth2::{AuthorizationCode, PkceCodeVerifier, TokenResponse};
use serde::Deserialize;
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    session::{SessionUser, CSRF_STATE, PKCE_VERIFIER, RETURN_URL, USER},
    AppResult, AppState, GetField,
};

use super::client::{GoogleClient, USERINFO_URL};

#[derive(Deserialize)]
pub(crate) struct CallbackQuery {
    pub(crate) state: Option<String>,
    pub(crate) code: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn callback(
    Query(CallbackQuery { state, code }): Query<CallbackQuery>,
    State(oauth): State<GoogleClient>,
    session: Session,
) -> AppResult<Redirect> {
    // A rejected or tampered handshake sends the visitor home, signed out.
    let user = match verify(&oauth, &session, state, code).await {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!("login rejected: {err}");
            return Ok(Redirect::to("/"));
        }
    };

    session.insert(USER, &user).await?;
    tracing::info!(user = %user.google_id, "login");

    let return_url: String = session
        .get(RETURN_URL)
        .await?
        .unwrap_or_else(|| "/".to_string());
    Ok(Redirect::to(&return_url))
}

async fn verify(
    oauth: &GoogleClient,
    session: &Session,
    state: Option<String>,
    code: Option<String>,
) -> AppResult<SessionUser> {
    let state = state.ok_or_else(|| anyhow::anyhow!("callback without state"))?;
    let code = code.ok_or_else(|| anyhow::anyhow!("callback without code"))?;

    let Some(stored_state) = session.get::<String>(CSRF_STATE).await? else {
        return Err(anyhow::anyhow!("no csrf state in session").into());
    };
    if state != stored_state {
        return Err(anyhow::anyhow!("csrf state mismatch").into());
    }
    let Some(pkce_verifier) = session.get::<String>(PKCE_VERIFIER).await? else {
        return Err(anyhow::anyhow!("no pkce verifier in session").into());
    };

    let client = oauth.get()?;
    let http_client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    let token_result = client
        .exchange_code(AuthorizationCode::new(code))
        .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier))
        .request_async(&http_client)
        .await?;

    let profile: Value = http_client
        .get(USERINFO_URL)
        .bearer_auth(token_result.access_token().secret())
        .send()
        .await?
        .json()
        .await?;

    let email = profile.get("email").and_then(Value::as_str).map(str::to_owned);
    let name = match profile.get("name").and_then(Value::as_str) {
        Some(name) => name.to_owned(),
        None => email.clone().unwrap_or_else(|| "Google user".to_owned()),
    };

    Ok(SessionUser {
        google_id: profile.get_str_field("id")?,
        email,
        name,
        picture: profile.get("picture").and_then(Value::as_str).map(str::to_owned),
    })
}
