use std::env;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_PEXELS_BASE_URL: &str = "https://api.pexels.com/v1";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct PexelsConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub production: bool,
    pub openai: OpenAiConfig,
    pub pexels: PexelsConfig,
}

/// Reads a variable, treating empty or whitespace-only values as unset.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        OpenAiConfig {
            api_key: None,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl OpenAiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        OpenAiConfig {
            api_key: non_empty_var("OPENAI_API_KEY"),
            base_url: non_empty_var("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            model: non_empty_var("OPENAI_MODEL").unwrap_or(defaults.model),
            temperature: non_empty_var("OPENAI_TEMPERATURE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.temperature),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

impl Default for PexelsConfig {
    fn default() -> Self {
        PexelsConfig {
            api_key: None,
            base_url: DEFAULT_PEXELS_BASE_URL.to_string(),
        }
    }
}

impl PexelsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        PexelsConfig {
            api_key: non_empty_var("PEXELS_API_KEY"),
            base_url: non_empty_var("PEXELS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_PEXELS_BASE_URL.to_string()),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            production: false,
            openai: OpenAiConfig::default(),
            pexels: PexelsConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let host = non_empty_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = non_empty_var("PORT")
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let production = non_empty_var("APP_ENV").map_or(false, |val| val == "production");

        Config {
            host,
            port,
            production,
            openai: OpenAiConfig::from_env(),
            pexels: PexelsConfig::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_openai(mut self, config: OpenAiConfig) -> Self {
        self.openai = config;
        self
    }

    pub fn with_pexels(mut self, config: PexelsConfig) -> Self {
        self.pexels = config;
        self
    }

    /// Names of the credentials that are not set, for startup diagnostics.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.openai.api_key.is_none() {
            missing.push("OPENAI_API_KEY");
        }
        if self.pexels.api_key.is_none() {
            missing.push("PEXELS_API_KEY");
        }
        missing
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
