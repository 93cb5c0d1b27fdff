/// Configuration constants for the Logplex API
pub mod api {
    /// Channel creation endpoint (unversioned)
    pub const CHANNELS: &str = "/channels";

    /// Versioned channels endpoint
    pub const V2_CHANNELS: &str = "/v2/channels";

    /// Drains sub-resource of a channel
    pub const DRAINS: &str = "drains";

    /// Authorization scheme; the auth key is used verbatim as the credential
    pub const AUTH_SCHEME: &str = "Basic";
}

/// Environment variable names (checked in order, first non-empty wins)
pub mod env {
    pub const ENDPOINT_VARS: &[&str] = &["LOGPLEX_ENDPOINT"];

    pub const AUTH_KEY_VARS: &[&str] = &["LOGPLEX_AUTH_KEY"];

    pub const HEROKU_CLOUD_VARS: &[&str] = &["LOGPLEX_HEROKU_CLOUD", "HEROKU_CLOUD"];

    pub const DEBUG_VARS: &[&str] = &["LOGPLEX_DEBUG", "DEBUG"];

    pub const SSL_INSECURE_VARS: &[&str] = &["LOGPLEX_SSL_INSECURE", "SSL_INSECURE"];

    /// Log level override for the CLI
    pub const LOG_LEVEL: &str = "LOGPLEX_LOG_LEVEL";
}

/// Known Heroku clouds and their Logplex API endpoints
pub mod clouds {
    pub const OPS: &str = "ops";
    pub const OPS_ENDPOINT: &str = "https://logs-api.herokai.com";

    pub const PRODUCTION: &str = "production";
    pub const PRODUCTION_ENDPOINT: &str = "https://logs-api.heroku.com";

    /// Dev clouds: `https://logplex-api-ssl.ssl.<cloud>.herokudev.com`
    pub const DEV_ENDPOINT_PREFIX: &str = "https://logplex-api-ssl.ssl.";
    pub const DEV_ENDPOINT_SUFFIX: &str = ".herokudev.com";

    /// Build the endpoint for a dev cloud
    pub fn dev_endpoint(cloud: &str) -> String {
        format!("{}{}{}", DEV_ENDPOINT_PREFIX, cloud, DEV_ENDPOINT_SUFFIX)
    }
}

/// Where operators find the auth key
pub mod secrets {
    pub const AUTH_KEY_HINT: &str = "ion-client config:get -a logplex LOGPLEX_AUTH_KEY";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Log level forced by the debug flag
    pub const DEBUG_LOG_LEVEL: &str = "debug";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_format() {
        assert!(api::CHANNELS.starts_with('/'));
        assert!(api::V2_CHANNELS.starts_with('/'));
        assert!(!api::DRAINS.starts_with('/'));
    }

    #[test]
    fn test_cloud_env_vars_prefer_prefixed_name() {
        assert_eq!(env::HEROKU_CLOUD_VARS[0], "LOGPLEX_HEROKU_CLOUD");
        assert_eq!(env::HEROKU_CLOUD_VARS[1], "HEROKU_CLOUD");
    }

    #[test]
    fn test_dev_endpoint() {
        assert_eq!(
            clouds::dev_endpoint("staging"),
            "https://logplex-api-ssl.ssl.staging.herokudev.com"
        );
    }

    #[test]
    fn test_fixed_endpoints_are_https() {
        assert!(clouds::OPS_ENDPOINT.starts_with("https://"));
        assert!(clouds::PRODUCTION_ENDPOINT.starts_with("https://"));
    }
}
