/// Context for failed HTTP calls
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Context for payloads that do not match the expected shape
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Context for missing or invalid environment configuration
pub fn config_context(name: &str) -> String {
    format!("Missing configuration: environment variable {} is not set", name)
}
