use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Default port the proxy server listens on. The client's default base URL is
/// derived from the same constant so the two sides cannot drift apart.
pub const DEFAULT_PORT: u16 = 5000;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Environment variable overriding the server port.
pub const PORT_ENV: &str = "PORT";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// port = 5000
/// api_key = "..."
/// server_url = "http://localhost:5000"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Port the proxy server listens on.
    pub port: u16,

    /// OpenWeather API key used by the proxy server.
    pub api_key: Option<String>,

    /// Base URL the terminal client uses to reach the proxy server.
    pub server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: None,
            server_url: format!("http://localhost:{DEFAULT_PORT}"),
        }
    }
}

impl Config {
    /// Load config from disk (or defaults when no file exists yet), then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_file()?;
        cfg.apply_env(std::env::vars())?;
        Ok(cfg)
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Apply `PORT` and `WEATHER_API_KEY` overrides from an environment-shaped
    /// iterator. Unrelated variables are ignored.
    pub fn apply_env(&mut self, vars: impl IntoIterator<Item = (String, String)>) -> Result<()> {
        for (key, value) in vars {
            match key.as_str() {
                PORT_ENV => {
                    self.port = value
                        .parse()
                        .with_context(|| format!("Invalid {PORT_ENV} value: {value}"))?;
                }
                API_KEY_ENV => self.api_key = Some(value),
                _ => {}
            }
        }

        Ok(())
    }

    /// Returns the configured API key, or an actionable setup error.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No OpenWeather API key configured.\n\
                 Hint: set the {API_KEY_ENV} environment variable, or add `api_key` to the config file."
            )
        })
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weathernow", "weathernow")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
