use std::env;
use std::path::PathBuf;

use tower_sessions::cookie::Key;

/// Runtime configuration, loaded once at startup from the environment
/// (optionally via a `.env` file). Every value has a development default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub production: bool,
    pub session_secret: Option<String>,
    pub google_client_id: Option<String>,
    pub google_client_secret: Option<String>,
    pub oauth_callback_url: String,
    pub courses_path: PathBuf,
    pub courses_dir: PathBuf,
    pub messages_path: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("Invalid PORT value");

        let production = env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        let session_secret = env::var("SESSION_SECRET").ok().filter(|s| !s.is_empty());
        let google_client_id = env::var("GOOGLE_CLIENT_ID").ok().filter(|s| !s.is_empty());
        let google_client_secret = env::var("GOOGLE_CLIENT_SECRET").ok().filter(|s| !s.is_empty());

        let oauth_callback_url = env::var("OAUTH_CALLBACK_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}/auth/google/callback"));

        let courses_path = env::var("COURSES_PATH")
            .unwrap_or_else(|_| "./data/courses.json".to_string())
            .into();

        let courses_dir = env::var("COURSES_DIR")
            .unwrap_or_else(|_| "./data/courses".to_string())
            .into();

        let messages_path = env::var("MESSAGES_PATH")
            .unwrap_or_else(|_| "./data/messages.json".to_string())
            .into();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            port,
            production,
            session_secret,
            google_client_id,
            google_client_secret,
            oauth_callback_url,
            courses_path,
            courses_dir,
            messages_path,
            log_level,
        }
    }

    /// Signing key for the session cookie. A missing secret yields a fresh
    /// random key, which invalidates all sessions on restart.
    pub fn session_key(&self) -> Key {
        match &self.session_secret {
            Some(secret) => {
                // Key::derive_from panics on short key material, so stretch the secret.
                let mut material = secret.clone().into_bytes();
                while material.len() < 64 {
                    material.extend_from_slice(secret.as_bytes());
                }
                Key::from(&material)
            }
            None => Key::generate(),
        }
    }
}
