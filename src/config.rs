use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Public origin used when rendering absolute URLs (hreflang, OpenGraph)
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Public origin
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        })
    }
}
