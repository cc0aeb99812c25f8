use oauth2::{basic::BasicClient, AuthUrl, Client, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use crate::{config::Config, AppResult};

pub(crate) type OAuthClient = Client<oauth2::StandardErrorResponse<oauth2::basic::BasicErrorResponseType>, oauth2::StandardTokenResponse<oauth2::EmptyExtraTokenFields, oauth2::basic::BasicTokenType>, oauth2::StandardTokenIntrospectionResponse<oauth2::EmptyExtraTokenFields, oauth2::basic::BasicTokenType>, oauth2::StandardRevocableToken, oauth2::StandardErrorResponse<oauth2::RevocationErrorResponseType>, oauth2::EndpointSet, oauth2::EndpointNotSet, oauth2::EndpointNotSet, oauth2::EndpointNotSet, oauth2::EndpointSet>;

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub(crate) const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// The configured half of the login flow: the `oauth2` client for Google,
/// present only when client id and secret were supplied.
#[derive(Clone)]
pub struct GoogleClient {
    client: Option<OAuthClient>,
}

impl GoogleClient {
    pub fn from_config(config: &Config) -> anyhow::Result<GoogleClient> {
        let client = match (&config.google_client_id, &config.google_client_secret) {
            (Some(id), Some(secret)) => {
                let auth_url = AuthUrl::new(AUTH_URL.to_string())?;
                let token_url = TokenUrl::new(TOKEN_URL.to_string())?;
                let redirect_url = RedirectUrl::new(config.oauth_callback_url.clone())?;

                Some(
                    BasicClient::new(ClientId::new(id.clone()))
                    .set_client_secret(ClientSecret::new(secret.clone()))
                    .set_auth_uri(auth_url)
                    .set_token_uri(token_url)
                    .set_redirect_uri(redirect_url)
                )
            }
            _ => None,
        };

        Ok(GoogleClient { client })
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub(crate) fn get(&self) -> AppResult<&OAuthClient> {
        self.client
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Google OAuth keys not supplied").into())
    }
}
