/// Backend used when no URL is baked in at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Front end settings, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Emit debug-level log lines
    pub verbose_logging: bool,
}

impl AppConfig {
    /// Read settings baked in at compile time.
    ///
    /// `BANK_DASHBOARD_API_URL` overrides the backend base URL.
    pub fn from_build_env() -> Self {
        Self {
            api_base_url: normalize_base_url(
                option_env!("BANK_DASHBOARD_API_URL").unwrap_or(DEFAULT_API_BASE_URL),
            ),
            verbose_logging: cfg!(debug_assertions),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Strip whitespace and trailing slashes so paths can be appended directly
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://bank.local:9000/"), "http://bank.local:9000");
        assert_eq!(normalize_base_url(" http://bank.local// "), "http://bank.local");
        assert_eq!(normalize_base_url(""), DEFAULT_API_BASE_URL);
    }

    #[wasm_bindgen_test]
    fn test_build_env_url_has_no_trailing_slash() {
        let config = AppConfig::from_build_env();
        assert!(!config.api_base_url.ends_with('/'));
    }
}
