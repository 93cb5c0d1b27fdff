//! Settings resolution from the environment

use log::{debug, warn};
use std::fmt;

use crate::config::{clouds, env, secrets};
use crate::error::{LogplexError, Result};

/// Raw settings as read from the environment, before endpoint derivation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSettings {
    pub endpoint: Option<String>,
    pub auth_key: Option<String>,
    pub heroku_cloud: Option<String>,
    pub debug: bool,
    pub ssl_insecure: bool,
}

/// Fully resolved settings, immutable for the lifetime of the process
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub auth_key: String,
    pub heroku_cloud: Option<String>,
    pub debug: bool,
    pub ssl_insecure: bool,
}

/// Transport configuration handed to the HTTP client builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportOptions {
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("endpoint", &self.endpoint)
            .field("auth_key", &"<redacted>")
            .field("heroku_cloud", &self.heroku_cloud)
            .field("debug", &self.debug)
            .field("ssl_insecure", &self.ssl_insecure)
            .finish()
    }
}

impl EnvSettings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            endpoint: first_set(&lookup, env::ENDPOINT_VARS)
                .map(|(_, v)| v.trim().to_string()),
            auth_key: first_set(&lookup, env::AUTH_KEY_VARS).map(|(_, v)| v),
            heroku_cloud: first_set(&lookup, env::HEROKU_CLOUD_VARS)
                .map(|(_, v)| v.trim().to_string()),
            debug: read_bool(&lookup, env::DEBUG_VARS)?,
            ssl_insecure: read_bool(&lookup, env::SSL_INSECURE_VARS)?,
        })
    }

    /// Derive the final settings:
    /// 1. Explicit endpoint wins
    /// 2. Otherwise derive it from the Heroku cloud
    /// 3. Auth key must be present
    pub fn resolve(self) -> Result<Settings> {
        let mut ssl_insecure = self.ssl_insecure;

        let endpoint = match (self.endpoint, self.heroku_cloud.as_deref()) {
            (Some(endpoint), _) => {
                debug!("Using endpoint from environment: {}", endpoint);
                endpoint
            }
            (None, Some(cloud)) => {
                let (endpoint, insecure) = endpoint_for_cloud(cloud)?;
                debug!("Using endpoint for cloud '{}': {}", cloud, endpoint);
                ssl_insecure |= insecure;
                endpoint
            }
            (None, None) => {
                return Err(LogplexError::Config(
                    "Either $HEROKU_CLOUD or $LOGPLEX_ENDPOINT must be set".to_string(),
                ))
            }
        };

        let auth_key = self.auth_key.ok_or_else(|| {
            LogplexError::Config(format!(
                "$LOGPLEX_AUTH_KEY is not set; retrieve it using `{}`",
                secrets::AUTH_KEY_HINT
            ))
        })?;

        if ssl_insecure {
            warn!("TLS certificate verification is disabled for {}", endpoint);
        }

        Ok(Settings {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            auth_key,
            heroku_cloud: self.heroku_cloud,
            debug: self.debug,
            ssl_insecure,
        })
    }
}

impl Settings {
    /// Transport options derived from these settings
    pub fn transport(&self) -> TransportOptions {
        TransportOptions {
            accept_invalid_certs: self.ssl_insecure,
        }
    }
}

/// Map a Heroku cloud name to its endpoint.
///
/// Returns the endpoint and whether TLS verification must be skipped.
pub fn endpoint_for_cloud(cloud: &str) -> Result<(String, bool)> {
    match cloud {
        clouds::OPS => Ok((clouds::OPS_ENDPOINT.to_string(), false)),
        clouds::PRODUCTION => Ok((clouds::PRODUCTION_ENDPOINT.to_string(), false)),
        other if is_dns_label(other) => Ok((clouds::dev_endpoint(other), true)),
        other => Err(LogplexError::Config(format!(
            "Unrecognized Heroku cloud '{}': expected 'ops', 'production' or a dev cloud name",
            other
        ))),
    }
}

/// Check that a name can be used as a single DNS label
fn is_dns_label(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 63
        && !name.starts_with('-')
        && !name.ends_with('-')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// First variable in `names` holding a non-blank value, returned untrimmed
fn first_set<F>(lookup: &F, names: &[&'static str]) -> Option<(&'static str, String)>
where
    F: Fn(&str) -> Option<String>,
{
    names.iter().find_map(|name| {
        lookup(name)
            .filter(|v| !v.trim().is_empty())
            .map(|v| (*name, v))
    })
}

fn read_bool<F>(lookup: &F, names: &[&'static str]) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match first_set(lookup, names) {
        None => Ok(false),
        Some((name, value)) => parse_bool(value.trim()).ok_or_else(|| {
            LogplexError::Config(format!(
                "${} must be a boolean (true/false/1/0), got '{}'",
                name, value
            ))
        }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
