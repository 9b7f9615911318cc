//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Table that receives captured leads when `LEADS_TABLE` is unset
pub const DEFAULT_LEADS_TABLE: &str = "hr_users";

/// Seconds before an insert into the table service is abandoned
pub const DEFAULT_LEADS_TIMEOUT_SECONDS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted table service
    /// Example: https://abcdefgh.supabase.co
    pub leads_api_url: Option<String>,

    /// API key sent with every write
    pub leads_api_key: Option<String>,

    /// Name of the table that stores leads
    pub leads_table: String,

    /// Timeout for one insert, in seconds
    pub leads_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            leads_api_url: non_empty_var("LEADS_API_URL"),
            leads_api_key: non_empty_var("LEADS_API_KEY"),
            leads_table: non_empty_var("LEADS_TABLE")
                .unwrap_or_else(|| DEFAULT_LEADS_TABLE.to_string()),
            leads_timeout_seconds: non_empty_var("LEADS_TIMEOUT_SECONDS")
                .and_then(|value| parse_timeout(&value))
                .unwrap_or(DEFAULT_LEADS_TIMEOUT_SECONDS),
        }
    }

    /// Check if the table service URL is configured
    pub fn has_leads_api_url(&self) -> bool {
        self.leads_api_url.is_some()
    }

    /// Check if the API key is configured
    pub fn has_leads_api_key(&self) -> bool {
        self.leads_api_key.is_some()
    }

    /// Lead capture needs both the URL and the key
    pub fn lead_capture_enabled(&self) -> bool {
        self.has_leads_api_url() && self.has_leads_api_key()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Positive whole seconds; anything else falls back to the default
fn parse_timeout(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    fn config(url: Option<&str>, key: Option<&str>) -> Config {
        Config {
            leads_api_url: url.map(str::to_string),
            leads_api_key: key.map(str::to_string),
            leads_table: DEFAULT_LEADS_TABLE.to_string(),
            leads_timeout_seconds: DEFAULT_LEADS_TIMEOUT_SECONDS,
        }
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = config(Some("https://example.supabase.co"), Some("anon-key"));

        assert!(config.has_leads_api_url());
        assert!(config.has_leads_api_key());
        assert!(config.lead_capture_enabled());
        assert_eq!(config.leads_table, "hr_users");
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = config(None, None);

        assert!(!config.has_leads_api_url());
        assert!(!config.has_leads_api_key());
        assert!(!config.lead_capture_enabled());
    }

    #[test]
    fn test_capture_needs_url_and_key() {
        assert!(!config(Some("https://example.supabase.co"), None).lead_capture_enabled());
        assert!(!config(None, Some("anon-key")).lead_capture_enabled());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("15"), Some(15));
        assert_eq!(parse_timeout(" 3 "), Some(3));
        assert_eq!(parse_timeout("0"), None);
        assert_eq!(parse_timeout("soon"), None);
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so only the invariants are checked
        let config = Config::from_env();

        assert!(!config.leads_table.is_empty());
        assert!(config.leads_timeout_seconds > 0);
        assert_eq!(
            config.lead_capture_enabled(),
            config.has_leads_api_url() && config.has_leads_api_key()
        );
    }

    #[test]
    fn test_config_default_calls_from_env() {
        let config = Config::default();
        assert!(!config.leads_table.is_empty());
    }

    #[test]
    fn test_config_debug() {
        let config = config(Some("https://example.supabase.co"), None);
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("leads_api_url"));
        assert!(debug_str.contains("hr_users"));
    }
}
