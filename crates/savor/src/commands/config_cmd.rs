//! Config subcommand handlers.

use std::collections::HashMap;

use dialoguer::{Input, Password, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, KEYRING_SERVICE, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
fn save_config(cfg: &Config) -> Result<(), CliError> {
    let path = config::config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: format!("failed to serialize config: {e}"),
    })?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn keyring_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "keyring".into(),
        reason: format!("failed to access keyring: {e}"),
    }
}

/// Store a secret in the keyring for `{profile}/{kind}`.
fn store_secret(profile_name: &str, kind: &str, secret: &str) -> Result<(), CliError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/{kind}"))
        .map_err(keyring_err)?;
    entry.set_password(secret).map_err(keyring_err)?;
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("Savor console — configuration wizard");
            eprintln!("  Config path: {}\n", config_path.display());

            // 1. Profile name
            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 2. Backend URL
            let server: String = Input::new()
                .with_prompt("Backend URL")
                .default("https://api.savor.example".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 3. Auth mode
            let auth_choices = &["Bearer token (recommended)", "Email/Password"];
            let auth_selection = Select::new()
                .with_prompt("Authentication method")
                .items(auth_choices)
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            let (auth_mode, token, email, password) = if auth_selection == 0 {
                // --- Token flow ---
                let secret = Password::new()
                    .with_prompt("Token")
                    .interact()
                    .map_err(prompt_err)?;

                if secret.is_empty() {
                    return Err(CliError::Validation {
                        field: "token".into(),
                        reason: "token cannot be empty".into(),
                    });
                }

                // Offer keyring storage
                let store_choices = &[
                    "Store in system keyring (recommended)",
                    "Save to config file (plaintext)",
                ];
                let store_selection = Select::new()
                    .with_prompt("Where to store the token?")
                    .items(store_choices)
                    .default(0)
                    .interact()
                    .map_err(prompt_err)?;

                let token_field = if store_selection == 0 {
                    store_secret(&profile_name, "token", &secret)?;
                    eprintln!("  Token stored in system keyring");
                    None
                } else {
                    Some(secret)
                };

                ("token".to_string(), token_field, None, None)
            } else {
                // --- Email/Password flow ---
                let user_email: String = Input::new()
                    .with_prompt("Email")
                    .interact_text()
                    .map_err(prompt_err)?;

                let pass = Password::new()
                    .with_prompt("Password")
                    .interact()
                    .map_err(prompt_err)?;

                if user_email.is_empty() || pass.is_empty() {
                    return Err(CliError::Validation {
                        field: "credentials".into(),
                        reason: "email and password cannot be empty".into(),
                    });
                }

                let store_choices = &[
                    "Store password in system keyring (recommended)",
                    "Save to config file (plaintext)",
                ];
                let store_selection = Select::new()
                    .with_prompt("Where to store the password?")
                    .items(store_choices)
                    .default(0)
                    .interact()
                    .map_err(prompt_err)?;

                let password_field = if store_selection == 0 {
                    store_secret(&profile_name, "password", &pass)?;
                    eprintln!("  Password stored in system keyring");
                    None
                } else {
                    Some(pass)
                };

                ("password".to_string(), None, Some(user_email), password_field)
            };

            // 4. Restaurant id (optional; the account's restaurant is used
            //    when left empty)
            let restaurant_input: String = Input::new()
                .with_prompt("Restaurant id (optional)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;
            let restaurant = if restaurant_input.trim().is_empty() {
                None
            } else {
                Some(restaurant_input.trim().to_string())
            };

            // 5. Build profile and config
            let profile = Profile {
                server,
                restaurant,
                auth_mode,
                token,
                token_env: None,
                email,
                password,
                ca_cert: None,
                insecure: None,
                timeout: None,
            };

            let mut profiles = HashMap::new();
            profiles.insert(profile_name.clone(), profile);

            let cfg = Config {
                default_profile: Some(profile_name.clone()),
                defaults: Default::default(),
                profiles,
            };

            // 6. Write config
            save_config(&cfg)?;

            eprintln!("\nConfiguration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: savor dashboard");

            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = output::render_single(
                &global.output,
                &cfg,
                |c| format!("{c:#?}"),
                |_| "config".into(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);

            let profile = cfg
                .profiles
                .entry(profile_name.clone())
                .or_insert_with(Profile::empty);

            match key.as_str() {
                "server" => profile.server = value,
                "restaurant" => profile.restaurant = Some(value),
                "auth_mode" | "auth-mode" => {
                    if value != "token" && value != "password" {
                        return Err(CliError::Validation {
                            field: "auth_mode".into(),
                            reason: "must be 'token' or 'password'".into(),
                        });
                    }
                    profile.auth_mode = value;
                }
                "token" => profile.token = Some(value),
                "token_env" | "token-env" => profile.token_env = Some(value),
                "email" => profile.email = Some(value),
                "insecure" => {
                    profile.insecure = Some(value.parse().map_err(|_| CliError::Validation {
                        field: "insecure".into(),
                        reason: "must be 'true' or 'false'".into(),
                    })?);
                }
                "timeout" => {
                    profile.timeout = Some(value.parse().map_err(|_| CliError::Validation {
                        field: "timeout".into(),
                        reason: "must be a number (seconds)".into(),
                    })?);
                }
                "ca_cert" | "ca-cert" => profile.ca_cert = Some(value.into()),
                other => {
                    return Err(CliError::Validation {
                        field: other.into(),
                        reason: format!(
                            "unknown config key '{other}'. Valid keys: server, restaurant, \
                             auth_mode, token, token_env, email, insecure, timeout, ca_cert"
                        ),
                    });
                }
            }

            save_config(&cfg)?;
            eprintln!("Set {key} on profile '{profile_name}'");
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: savor config init");
            } else {
                for name in cfg.profiles.keys() {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();

            if !cfg.profiles.contains_key(&name) {
                let available: Vec<_> = cfg.profiles.keys().cloned().collect();
                return Err(CliError::ProfileNotFound {
                    name,
                    available: if available.is_empty() {
                        "(none)".into()
                    } else {
                        available.join(", ")
                    },
                });
            }

            cfg.default_profile = Some(name.clone());
            save_config(&cfg)?;
            eprintln!("Default profile set to '{name}'");
            Ok(())
        }

        // ── SetSecret ───────────────────────────────────────────────
        ConfigCommand::SetSecret { profile } => {
            let cfg = config::load_config_or_default();
            let profile_name =
                profile.unwrap_or_else(|| config::active_profile_name(global, &cfg));

            let prof = cfg.profiles.get(&profile_name).ok_or_else(|| {
                let available: Vec<_> = cfg.profiles.keys().cloned().collect();
                CliError::ProfileNotFound {
                    name: profile_name.clone(),
                    available: if available.is_empty() {
                        "(none)".into()
                    } else {
                        available.join(", ")
                    },
                }
            })?;

            let (kind, prompt_label) = match prof.auth_mode.as_str() {
                "token" => ("token", "Token"),
                _ => ("password", "Password"),
            };

            let secret = Password::new()
                .with_prompt(prompt_label)
                .interact()
                .map_err(prompt_err)?;

            if secret.is_empty() {
                return Err(CliError::Validation {
                    field: "secret".into(),
                    reason: "value cannot be empty".into(),
                });
            }

            store_secret(&profile_name, kind, &secret)?;
            eprintln!("Secret stored in system keyring for profile '{profile_name}'");
            Ok(())
        }
    }
}
