use crate::options::Options;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

fn default_listen() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}
fn default_base_path() -> String { "/".to_string() }
fn default_name() -> String { "App".to_string() }
fn default_favicon() -> PathBuf { PathBuf::from("favicon.png") }

/// Settings shared by `favicon-server` and `favicon-export`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub start_url: Option<String>,
    #[serde(default)]
    pub theme_color: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub tile_color: Option<String>,
    // Relative paths resolve against the working directory
    #[serde(default = "default_favicon")]
    pub favicon: PathBuf,
    #[serde(default)]
    pub apple_touch_icon: Option<PathBuf>,
    #[serde(default)]
    pub ico: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            base_path: default_base_path(),
            name: default_name(),
            short_name: None,
            display: None,
            start_url: None,
            theme_color: None,
            background_color: None,
            tile_color: None,
            favicon: default_favicon(),
            apple_touch_icon: None,
            ico: false,
        }
    }
}

impl ServerConfig {
    /// Reads the image files and assembles [`Options`].
    pub fn options(&self) -> Result<Options> {
        let favicon = fs::read(&self.favicon)
            .with_context(|| format!("Failed to read favicon {}", self.favicon.display()))?;
        let apple_touch_icon = match &self.apple_touch_icon {
            Some(path) => Some(
                fs::read(path)
                    .with_context(|| format!("Failed to read apple touch icon {}", path.display()))?,
            ),
            None => None,
        };

        Ok(Options {
            name: self.name.clone(),
            short_name: self.short_name.clone(),
            display: self.display.clone(),
            start_url: self.start_url.clone(),
            theme_color: self.theme_color.clone(),
            background_color: self.background_color.clone(),
            tile_color: self.tile_color.clone(),
            favicon,
            apple_touch_icon,
            ico: self.ico,
        })
    }

    /// Applies `FAVICON_*` overrides. `lookup` is `std::env::var` outside tests.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(listen) = lookup("FAVICON_LISTEN") {
            self.listen = listen
                .parse()
                .with_context(|| format!("Invalid FAVICON_LISTEN: {}", listen))?;
        }
        if let Some(v) = lookup("FAVICON_BASE_PATH") { self.base_path = v; }
        if let Some(v) = lookup("FAVICON_NAME") { self.name = v; }
        if let Some(v) = lookup("FAVICON_SHORT_NAME") { self.short_name = Some(v); }
        if let Some(v) = lookup("FAVICON_DISPLAY") { self.display = Some(v); }
        if let Some(v) = lookup("FAVICON_START_URL") { self.start_url = Some(v); }
        if let Some(v) = lookup("FAVICON_THEME_COLOR") { self.theme_color = Some(v); }
        if let Some(v) = lookup("FAVICON_BACKGROUND_COLOR") { self.background_color = Some(v); }
        if let Some(v) = lookup("FAVICON_TILE_COLOR") { self.tile_color = Some(v); }
        if let Some(v) = lookup("FAVICON_SOURCE") { self.favicon = PathBuf::from(v); }
        if let Some(v) = lookup("FAVICON_TOUCH_SOURCE") { self.apple_touch_icon = Some(PathBuf::from(v)); }
        if let Some(v) = lookup("FAVICON_ICO") {
            self.ico = matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }
        Ok(())
    }
}

// --- Config path ---

fn default_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("com", "favicon-kit", "server")?;
    let path = proj.config_dir().join("favicon.json");
    if path.exists() { Some(path) } else { None }
}

pub fn read_config_file(path: &Path) -> Result<ServerConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Invalid config {}", path.display()))
}

// --- Public API ---

/// Loads configuration from, in order: `FAVICON_CONFIG`, the per-user
/// config dir, built-in defaults. `FAVICON_*` variables (including ones
/// from a `.env` file) override the file.
pub fn load_config() -> Result<ServerConfig> {
    let _ = dotenv::dotenv();

    let path = env::var("FAVICON_CONFIG")
        .ok()
        .map(PathBuf::from)
        .or_else(default_config_path);

    let mut config = match path {
        Some(path) => read_config_file(&path)?,
        None => ServerConfig::default(),
    };
    config.apply_overrides(|key| env::var(key).ok())?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favicon.json");
        fs::write(&path, "{}").unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favicon.json");
        fs::write(
            &path,
            r##"{
                "listen": "0.0.0.0:9000",
                "base_path": "/static",
                "name": "Shop",
                "short_name": "S",
                "tile_color": "#2b5797",
                "favicon": "assets/icon.png",
                "ico": true
            }"##,
        )
        .unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config.listen, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.base_path, "/static");
        assert_eq!(config.short_name.as_deref(), Some("S"));
        assert_eq!(config.tile_color.as_deref(), Some("#2b5797"));
        assert_eq!(config.favicon, PathBuf::from("assets/icon.png"));
        assert!(config.ico);
        assert_eq!(config.display, None);
    }

    #[test]
    fn env_overrides_win() {
        let vars: HashMap<&str, &str> = [
            ("FAVICON_NAME", "Override"),
            ("FAVICON_LISTEN", "127.0.0.1:3000"),
            ("FAVICON_ICO", "true"),
        ]
        .into_iter()
        .collect();

        let mut config = ServerConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.name, "Override");
        assert_eq!(config.listen.port(), 3000);
        assert!(config.ico);
    }

    #[test]
    fn bad_listen_override_is_an_error() {
        let mut config = ServerConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "FAVICON_LISTEN").then(|| "not-an-addr".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn missing_favicon_file_is_reported() {
        let config = ServerConfig {
            favicon: PathBuf::from("/definitely/missing/favicon.png"),
            ..Default::default()
        };
        let err = config.options().unwrap_err();
        assert!(err.to_string().contains("favicon"));
    }
}
