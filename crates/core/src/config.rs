use crate::error::{CreativeError, CreativeResult};
use secrecy::SecretString;
use serde::Deserialize;

/// Copy length the generation prompt asks the model to stay within.
pub const DEFAULT_MAX_COPY_CHARS: usize = 125;

/// Root configuration. Loaded once at process start from `.env`, the
/// `GEMINI_API_KEY` / `FACEBOOK_ACCESS_TOKEN` credentials and variables
/// prefixed with `CREATIVE_EXPRESS__`, then passed explicitly to whatever
/// needs it.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub meta: MetaConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// Absent key means copy falls back to the static template.
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// No timeout unless set.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_max_copy_chars")]
    pub max_copy_chars: usize,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MetaConfig {
    #[serde(default)]
    pub access_token: Option<SecretString>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

fn default_gemini_model() -> String {
    "gemini-pro".to_string()
}
fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}
fn default_max_copy_chars() -> usize {
    DEFAULT_MAX_COPY_CHARS
}
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            timeout_secs: None,
            max_copy_chars: default_max_copy_chars(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl MetaConfig {
    /// The ads-platform credential, or a configuration error naming the
    /// variable that is missing.
    pub fn require_access_token(&self) -> CreativeResult<&SecretString> {
        self.access_token.as_ref().ok_or_else(|| {
            CreativeError::Config("FACEBOOK_ACCESS_TOKEN not found in .env".to_string())
        })
    }
}

impl AppConfig {
    /// Load configuration from `.env`, credential variables and
    /// `CREATIVE_EXPRESS__*` overrides.
    pub fn load() -> CreativeResult<Self> {
        // A missing .env file is fine; real environment variables still apply.
        let _ = dotenvy::dotenv();

        let builder = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("CREATIVE_EXPRESS")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("gemini.api_key", non_empty_var("GEMINI_API_KEY"))?
            .set_override_option("meta.access_token", non_empty_var("FACEBOOK_ACCESS_TOKEN"))?;

        Self::from_config(builder.build()?)
    }

    /// Deserialize an already-built `config::Config`.
    pub fn from_config(config: config::Config) -> CreativeResult<Self> {
        Ok(config.try_deserialize()?)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
