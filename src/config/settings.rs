use super::area::AreaSettings;

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://app.utrsports.net",
            user_agent: "TeamRatings/1.0",
            timeout_secs: 30,
            rate_limit_ms: 250, // 4 req/sec
        }
    }
}

/// Static configuration handed to the services explicitly
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub area: AreaSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            area: AreaSettings::default(),
        }
    }
}
