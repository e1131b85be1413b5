//! Configuration handling for the contact form

use crate::state::ContactContent;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default EmailJS REST endpoint
pub const DEFAULT_API_BASE: &str = "https://api.emailjs.com";

/// Delay between the last keystroke and field revalidation
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// EmailJS identifiers and transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub api_base: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: 30,
        }
    }
}

/// User configuration for the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub emailjs: EmailJsConfig,
    /// Debounce delay for keystroke validation, in milliseconds
    pub debounce_ms: u64,
    /// Display strings; omitted keys keep their defaults
    pub content: ContactContent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            emailjs: EmailJsConfig::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            content: ContactContent::default(),
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "orvith", "contact-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("invalid config in {}", path.display()))?
            }
            _ => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Override EmailJS settings from `CONTACT_EMAILJS_*` variables
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let targets = [
            ("CONTACT_EMAILJS_SERVICE_ID", &mut self.emailjs.service_id),
            ("CONTACT_EMAILJS_TEMPLATE_ID", &mut self.emailjs.template_id),
            ("CONTACT_EMAILJS_PUBLIC_KEY", &mut self.emailjs.public_key),
            ("CONTACT_EMAILJS_API_BASE", &mut self.emailjs.api_base),
        ];
        for (key, slot) in targets {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *slot = value;
            }
        }
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
