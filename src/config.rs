use serde::Deserialize;

/// Prefix shared by every environment variable the service reads
pub const ENV_PREFIX: &str = "GOOD_MOVIE_";

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Document store connection string (`GOOD_MOVIE_MONGODB`)
    pub mongodb: String,

    /// Database holding the movie and reference collections (`GOOD_MOVIE_DB_NAME`)
    pub db_name: String,

    /// Server port (`GOOD_MOVIE_PORT`)
    pub port: u16,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Interpolate the search query into the title pattern without escaping
    #[serde(default)]
    pub raw_search_pattern: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_iter<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
