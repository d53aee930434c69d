//! CLI-owned configuration: TOML profiles, credential resolution, and
//! translation to `savor_core::ConsoleConfig`.
//!
//! Core never sees these types -- it receives a pre-built `ConsoleConfig`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use savor_core::{AuthCredentials, ConsoleConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Keyring service name for stored secrets.
pub const KEYRING_SERVICE: &str = "savor";

// ── TOML config structs ──────────────────────────────────────────────

/// CLI-owned TOML configuration. Core never touches this type.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name (used when --profile is not specified).
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// CLI-owned profile definition.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL (e.g., "https://api.savor.example").
    pub server: String,

    /// Restaurant id. Omit to use the restaurant owned by the account.
    pub restaurant: Option<String>,

    /// Auth mode: "token" (bearer token) or "password" (email/password login).
    #[serde(default = "default_auth_mode")]
    pub auth_mode: String,

    /// Bearer token (plaintext -- prefer keyring or env var).
    pub token: Option<String>,

    /// Environment variable name containing the token.
    pub token_env: Option<String>,

    /// Email for password auth.
    pub email: Option<String>,

    /// Password (plaintext -- prefer keyring).
    pub password: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

impl Profile {
    /// An empty token-mode profile, used when `config set` runs before `init`.
    pub fn empty() -> Self {
        Self {
            server: String::new(),
            restaurant: None,
            auth_mode: default_auth_mode(),
            token: None,
            token_env: None,
            email: None,
            password: None,
            ca_cert: None,
            insecure: None,
            timeout: None,
        }
    }
}

fn default_auth_mode() -> String {
    "token".into()
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "savor", "savor")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        })
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("savor");
    p
}

// ── Config loading ───────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, CliError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("SAVOR_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Profile resolution ───────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `ConsoleConfig` from the config file, profile, and CLI overrides.
pub fn build_console_config(global: &GlobalOpts) -> Result<ConsoleConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    // If a profile exists, use it with CLI flag overrides
    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, global);
    }

    // No profile found -- try to build from CLI flags / env vars alone
    let url_str = global.server.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;

    let url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    let auth = if let Some(ref token) = global.token {
        AuthCredentials::Token(SecretString::from(token.clone()))
    } else {
        return Err(CliError::NoCredentials {
            profile: profile_name,
        });
    };

    let tls = if global.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(ConsoleConfig {
        url,
        auth,
        restaurant_id: global.restaurant.clone(),
        tls,
        timeout: Duration::from_secs(global.timeout),
    })
}

/// Translate a CLI `Profile` + global flags into a `ConsoleConfig`.
///
/// This is the single boundary where CLI config types cross into core types.
fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<ConsoleConfig, CliError> {
    // 1. Backend URL (flag > env > profile)
    let url_str = global.server.as_deref().unwrap_or(&profile.server);
    let url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    // 2. Auth credentials
    let auth = match profile.auth_mode.as_str() {
        "token" => {
            let secret = resolve_token(profile, profile_name, global)?;
            AuthCredentials::Token(secret)
        }
        "password" => {
            let (email, password) = resolve_password_credentials(profile, profile_name)?;
            AuthCredentials::Credentials { email, password }
        }
        other => {
            return Err(CliError::Validation {
                field: "auth_mode".into(),
                reason: format!("expected 'token' or 'password', got '{other}'"),
            });
        }
    };

    // 3. TLS verification
    let tls = if global.insecure || profile.insecure.unwrap_or(false) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    // 4. Restaurant (flag > env > profile; None lets core fall back to
    //    the account's restaurant)
    let restaurant_id = global.restaurant.clone().or_else(|| profile.restaurant.clone());

    // 5. Timeout
    let timeout = Duration::from_secs(profile.timeout.unwrap_or(global.timeout));

    Ok(ConsoleConfig {
        url,
        auth,
        restaurant_id,
        tls,
        timeout,
    })
}

// ── Credential helpers ───────────────────────────────────────────────

/// Resolve a bearer token from the credential chain.
fn resolve_token(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<SecretString, CliError> {
    // 1. CLI flag / SAVOR_TOKEN env
    if let Some(ref token) = global.token {
        return Ok(SecretString::from(token.clone()));
    }

    // 2. Profile's token_env -> env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 3. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/token")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 4. Plaintext in config
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(CliError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Resolve password credentials (email + password).
fn resolve_password_credentials(
    profile: &Profile,
    profile_name: &str,
) -> Result<(String, SecretString), CliError> {
    let email = profile
        .email
        .clone()
        .or_else(|| std::env::var("SAVOR_EMAIL").ok())
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.into(),
        })?;

    // 1. Env var
    if let Ok(pw) = std::env::var("SAVOR_PASSWORD") {
        return Ok((email, SecretString::from(pw)));
    }

    // 2. Keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password")) {
        if let Ok(pw) = entry.get_password() {
            return Ok((email, SecretString::from(pw)));
        }
    }

    // 3. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok((email, SecretString::from(pw.clone())));
    }

    Err(CliError::NoCredentials {
        profile: profile_name.into(),
    })
}
