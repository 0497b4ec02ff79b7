use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub key_version: u32,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub dir: PathBuf,
    pub max_upload_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Unset means the assistant runs in fallback-only mode.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

/// Language of all user-facing message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Ar,
    En,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt: JwtConfig,
    pub storage: StorageConfig,
    pub provider: ProviderConfig,
    pub locale: Locale,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "docmind".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "docmind-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24),
            key_version: std::env::var("JWT_KEY_VERSION")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(1),
        };
        let storage = StorageConfig {
            dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".into())
                .into(),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(50 * 1024 * 1024),
        };
        let provider = ProviderConfig {
            api_key: std::env::var("PROVIDER_API_KEY").ok().filter(|k| !k.is_empty()),
            base_url: std::env::var("PROVIDER_BASE_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".into()),
            model: std::env::var("PROVIDER_MODEL")
                .unwrap_or_else(|_| "mixtral-8x7b-32768".into()),
            timeout_secs: std::env::var("PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(30),
        };
        let locale = match std::env::var("APP_LOCALE").as_deref() {
            Ok("en") => Locale::En,
            _ => Locale::Ar,
        };
        Ok(Self {
            jwt,
            storage,
            provider,
            locale,
        })
    }
}
