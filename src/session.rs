use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::AppResult;

pub const CSRF_STATE: &str = "csrf_state";
pub const PKCE_VERIFIER: &str = "pkce_verifier";
pub const RETURN_URL: &str = "return_url";
pub const USER: &str = "user";

/// The signed-in user as kept in the session, shaped from the Google
/// userinfo profile. Stored and read back as-is; there is no user database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "googleId")]
    pub google_id: String,
    pub email: Option<String>,
    pub name: String,
    pub picture: Option<String>,
}

pub async fn current_user(session: &Session) -> AppResult<Option<SessionUser>> {
    Ok(session.get(USER).await?)
}
