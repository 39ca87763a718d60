use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Process-level authentication configuration.
///
/// Loaded once at startup and passed by reference into the core components;
/// the core itself never reads the environment.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub token: TokenConfig,
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret. No default: startup fails without one.
    pub secret: String,
    /// Signing algorithm name (HMAC family, e.g. "HS256")
    pub algorithm: String,
    /// Fixed lifetime of issued tokens
    pub lifetime_minutes: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost exponent
    pub cost: u32,
}

impl AuthConfig {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__TOKEN__SECRET, AUTH__TOKEN__ALGORITHM, ...)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults (HS256, 30 minute lifetime, default bcrypt cost)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("token.algorithm", "HS256")?
            .set_default("token.lifetime_minutes", 30_i64)?
            .set_default("password.cost", i64::from(bcrypt::DEFAULT_COST))?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: AUTH__TOKEN__SECRET=... overrides token.secret
            .add_source(
                Environment::with_prefix("AUTH")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let config: AuthConfig = configuration.try_deserialize()?;

        Ok(config)
    }
}
