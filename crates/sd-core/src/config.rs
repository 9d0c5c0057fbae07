use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Env var overriding `backend.url`.
pub const BACKEND_URL_ENV: &str = "SERVICEDESK_BACKEND_URL";
/// Env var overriding `backend.anon_key`.
pub const BACKEND_KEY_ENV: &str = "SERVICEDESK_BACKEND_KEY";

/// Top-level configuration loaded from `~/.servicedesk/config.toml`.
///
/// The anon key may live in the file for convenience, but the env vars
/// above always win so deployments can keep credentials out of dotfiles.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub copilot: CopilotConfig,
}

impl Config {
    /// Load config from `~/.servicedesk/config.toml`, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            let text =
                std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
            let cfg: Config =
                toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
            cfg.validate()?;
            Ok(cfg)
        } else {
            let cfg = Config::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let cfg: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Semantic validation for settings that are not fully expressible via
    /// type checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.backend.validate()?;
        self.ui.validate()?;
        self.copilot.validate()?;
        Ok(())
    }

    /// Directory holding the config file and logs: `~/.servicedesk`.
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".servicedesk")
    }

    fn default_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the hosted backend, e.g. `https://xyz.supabase.co`.
    #[serde(default)]
    pub url: String,
    /// The public anon key sent as `apikey` and bearer token.
    #[serde(default)]
    pub anon_key: String,
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

impl BackendConfig {
    /// The backend URL with the env override applied.
    pub fn resolved_url(&self) -> String {
        env_nonempty(BACKEND_URL_ENV).unwrap_or_else(|| self.url.trim_end_matches('/').to_string())
    }

    /// The anon key with the env override applied.
    pub fn resolved_key(&self) -> String {
        env_nonempty(BACKEND_KEY_ENV).unwrap_or_else(|| self.anon_key.clone())
    }

    /// True when both a URL and key are available; otherwise the app runs on
    /// local demo data only.
    pub fn enabled(&self) -> bool {
        !self.resolved_url().is_empty() && !self.resolved_key().is_empty()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(5..=3600).contains(&self.refresh_secs) {
            return Err(ConfigError::Validation(
                "backend.refresh_secs must be between 5 and 3600".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn default_refresh_secs() -> u64 {
    30
}

/// Canonical `ui.default_view` names, one per dashboard tab.
pub const VIEW_NAMES: &[&str] = &[
    "dashboard",
    "tickets",
    "create",
    "incidents",
    "scheduler",
    "techs",
    "tasks",
    "reminders",
    "announcements",
    "copilot",
    "teams",
    "agents",
    "reports",
    "automation",
    "settings",
];

/// Shorthand spellings the `:view` command resolves to the same views.
pub const VIEW_NAME_ALIASES: &[&str] = &[
    "dash",
    "new",
    "major",
    "schedule",
    "availability",
    "announce",
    "assistant",
    "config",
];

/// True when `name` names a view, canonically or through an alias.
/// Matching is trimmed and case-insensitive, like the `:view` command.
pub fn is_view_name(name: &str) -> bool {
    let name = name.trim().to_lowercase();
    VIEW_NAMES.contains(&name.as_str()) || VIEW_NAME_ALIASES.contains(&name.as_str())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval for the input loop.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// View shown on startup; any spelling in [`VIEW_NAMES`] or
    /// [`VIEW_NAME_ALIASES`].
    #[serde(default = "default_view")]
    pub default_view: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            default_view: default_view(),
        }
    }
}

impl UiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(50..=1000).contains(&self.tick_ms) {
            return Err(ConfigError::Validation(
                "ui.tick_ms must be between 50 and 1000".to_string(),
            ));
        }
        if !is_view_name(&self.default_view) {
            return Err(ConfigError::Validation(format!(
                "ui.default_view {:?} is not a view name (one of: {})",
                self.default_view,
                VIEW_NAMES.join(", ")
            )));
        }
        Ok(())
    }
}

fn default_tick_ms() -> u64 {
    250
}
fn default_view() -> String {
    "dashboard".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotConfig {
    /// Simulated thinking time before the canned reply is delivered.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

impl Default for CopilotConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

impl CopilotConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.reply_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "copilot.reply_delay_ms must be at most 10000".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_reply_delay_ms() -> u64 {
    1500
}
