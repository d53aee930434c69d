// Back-office API HTTP client
//
// Wraps `reqwest::Client` with Savor-specific URL construction and envelope
// unwrapping. All endpoint groups (vouchers, foods, orders, ...) are
// implemented as inherent methods via separate files to keep this module
// focused on transport mechanics.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::ApiEnvelope;
use crate::transport::TransportConfig;

/// Raw HTTP client for the Savor back-office API.
///
/// Handles the `{ success, message, data }` envelope and `api/`-prefixed URL
/// construction. All methods return unwrapped `data` payloads -- the envelope
/// is stripped before the caller sees it.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    transport: TransportConfig,
}

impl ApiClient {
    /// Create an unauthenticated client from a `TransportConfig`.
    ///
    /// Suitable only for `login`; every other endpoint requires a bearer
    /// token. The `base_url` should be the backend root
    /// (e.g. `https://api.savor.example`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            transport: transport.clone(),
        })
    }

    /// Create a client that sends `Authorization: Bearer {token}` on every
    /// request.
    pub fn with_token(
        base_url: Url,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| Error::Authentication {
                message: "token contains characters not valid in a header".into(),
            })?;
        headers.insert(AUTHORIZATION, value);

        let http = transport.build_client_with_headers(headers)?;
        Ok(Self {
            http,
            base_url,
            transport: transport.clone(),
        })
    }

    /// Rebuild this client with a bearer token (used after `login`).
    pub fn into_authenticated(self, token: &SecretString) -> Result<Self, Error> {
        Self::with_token(self.base_url, token, &self.transport)
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/api/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let full = format!(
            "{}/api/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path
        );
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        self.parse_envelope(resp).await
    }

    /// Send a POST request with JSON body and unwrap the envelope.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        debug!("POST {}", url);
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.parse_envelope(resp).await
    }

    /// Send a PUT request with JSON body and unwrap the envelope.
    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        debug!("PUT {}", url);
        let resp = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.parse_envelope(resp).await
    }

    /// Send a POST request and return the raw response (auth flows that
    /// need status-specific handling).
    pub(crate) async fn post_raw(
        &self,
        url: Url,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, Error> {
        debug!("POST {}", url);
        self.http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)
    }

    /// Send a DELETE request, checking the envelope for success but
    /// discarding any payload.
    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {}", url);
        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.parse_envelope_empty(resp).await
    }

    /// Parse the `{ success, message, data }` envelope, returning `data` on
    /// success or an `Error::Api` if `success` is false.
    async fn parse_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::SessionExpired);
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        let envelope: ApiEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;

        if !envelope.success {
            return Err(Error::Api {
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("request rejected (HTTP {status})")),
                status: status.as_u16(),
            });
        }

        envelope.data.ok_or_else(|| Error::Deserialization {
            message: "envelope marked success but carried no data".into(),
            body,
        })
    }

    /// Like `parse_envelope`, for endpoints whose `data` is null or absent.
    async fn parse_envelope_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::SessionExpired);
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;

        if envelope.success {
            Ok(())
        } else {
            Err(Error::Api {
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("request rejected (HTTP {status})")),
                status: status.as_u16(),
            })
        }
    }
}
