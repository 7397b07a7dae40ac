//! Frontend configuration module
//!
//! Values are baked in at build time from `PROCURA_*` environment variables.

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_DOCUMENTATION_URL: &str = "https://github.com/procura/procura";
const DEFAULT_TOAST_TIMEOUT_MS: u32 = 5_000;

/// Frontend configuration for URLs and UI timings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Prefix of every backend REST call
    pub api_base_url: String,
    /// Documentation URL linked from the dashboard
    pub documentation_url: String,
    /// How long a notification stays on screen
    pub toast_timeout_ms: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("PROCURA_API_BASE_URL"),
            option_env!("PROCURA_DOCUMENTATION_URL"),
            option_env!("PROCURA_TOAST_TIMEOUT_MS"),
        )
    }
}

impl FrontendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw optional values, falling back per field.
    fn from_values(
        api_base_url: Option<&str>,
        documentation_url: Option<&str>,
        toast_timeout_ms: Option<&str>,
    ) -> Self {
        fn non_empty(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }
        Self {
            api_base_url: non_empty(api_base_url)
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            documentation_url: non_empty(documentation_url)
                .unwrap_or(DEFAULT_DOCUMENTATION_URL)
                .to_string(),
            toast_timeout_ms: non_empty(toast_timeout_ms)
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_TOAST_TIMEOUT_MS),
        }
    }

    pub fn documentation_url(&self) -> &str {
        &self.documentation_url
    }
}
