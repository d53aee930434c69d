// Authentication endpoints
//
// Token-based login. The login endpoint returns a bearer token which the
// caller feeds back through `ApiClient::into_authenticated`; every other
// endpoint expects that token in the `Authorization` header.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{ApiEnvelope, LoginRecord, UserRecord};

impl ApiClient {
    /// Authenticate with email/password.
    ///
    /// `POST api/auth/login`. Returns the bearer token and the logged-in
    /// account record (`_id`, `name`, `role`, owning restaurant).
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<LoginRecord, Error> {
        let url = self.api_url("auth/login")?;
        debug!("logging in at {}", url);

        let body = json!({
            "email": email,
            "password": password.expose_secret(),
        });

        // Login gets bespoke handling: a 401 here means bad credentials,
        // not an expired session.
        let resp = self.post_raw(url, &body).await?;
        let status = resp.status();
        let text = resp.text().await.map_err(Error::Transport)?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            let envelope: Result<ApiEnvelope<serde_json::Value>, _> =
                serde_json::from_str(&text);
            let message = envelope
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "invalid email or password".into());
            return Err(Error::Authentication { message });
        }

        let envelope: ApiEnvelope<LoginRecord> =
            serde_json::from_str(&text).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: text.clone(),
            })?;

        if !envelope.success {
            return Err(Error::Authentication {
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("login failed (HTTP {status})")),
            });
        }

        envelope.data.ok_or(Error::Deserialization {
            message: "login response carried no token".into(),
            body: text,
        })
    }

    /// Fetch the logged-in account record.
    ///
    /// `GET api/auth/me` -- used to verify a stored token is still valid.
    pub async fn current_user(&self) -> Result<UserRecord, Error> {
        let url = self.api_url("auth/me")?;
        self.get(url).await
    }
}
