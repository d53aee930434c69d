// ── Runtime connection configuration ──
//
// These types describe *how* to reach the Savor backend. They carry
// credential data and connection tuning, but never touch disk. The CLI
// constructs a `ConsoleConfig` and hands it in -- core never reads config
// files or ambient device storage.

use secrecy::SecretString;
use url::Url;

/// How to authenticate with the backend.
#[derive(Debug, Clone)]
pub enum AuthCredentials {
    /// Pre-issued bearer token (preferred for scripted use).
    Token(SecretString),
    /// Email/password login; the token is obtained at connect time.
    Credentials {
        email: String,
        password: SecretString,
    },
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict). Default -- the hosted backend has real certs.
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-hosted dev backends).
    DangerAcceptInvalid,
}

/// Configuration for connecting to a single backend.
///
/// Built by the CLI, passed to `Console`.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Backend URL (e.g., `https://api.savor.example`).
    pub url: Url,
    /// Authentication method and credentials.
    pub auth: AuthCredentials,
    /// The restaurant this console session operates on. When `None`, the
    /// restaurant attached to the logged-in account is used.
    pub restaurant_id: Option<String>,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: std::time::Duration,
}
