pub const DEFAULT_VERSION: &str = "1.0.1";
pub const DEFAULT_PORT: &str = "8080";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Reported in the `version` field of every response.
    pub version: String,
    /// Passed to the listener as-is; an unusable value fails at bind time.
    pub port: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            version: env_or("APP_VERSION", DEFAULT_VERSION),
            port: env_or("PORT", DEFAULT_PORT),
        }
    }
}

/// Empty values count as unset.
fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
