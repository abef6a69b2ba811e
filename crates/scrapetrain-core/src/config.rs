use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Name of the directory created under `$HOME` when no output dir is configured.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "scrapetrain";

/// Site the scraper is coupled to (`[site]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Canonical base URL; bare profile names are appended to it.
    pub base_url: String,
    /// Hostnames accepted for profile URLs. Each also matches with a `www.` prefix.
    pub hostnames: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://traktrain.com/".to_string(),
            hostnames: vec!["traktrain.com".to_string()],
        }
    }
}

impl SiteConfig {
    /// Base URL with exactly one trailing slash.
    pub fn base(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    /// Value for the `Origin` header (no trailing slash).
    pub fn origin(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }

    /// Value for the `Referer` header (trailing slash).
    pub fn referer(&self) -> String {
        self.base()
    }

    /// True if `host` is one of the site's hostnames, with or without `www.`.
    pub fn is_site_host(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.');
        let bare = host.strip_prefix("www.").unwrap_or(host);
        self.hostnames
            .iter()
            .any(|h| h.eq_ignore_ascii_case(bare) || h.eq_ignore_ascii_case(host))
    }
}

/// HTTP transport parameters (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout; audio payloads are fetched in one GET.
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 300,
            user_agent: None,
        }
    }
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Global configuration loaded from `~/.config/scrapetrain/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Base output directory; tracks land in `<output_dir>/<artist>/`. None = `~/scrapetrain`.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Listing pages fetched per profile before giving up on the empty-results marker.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    #[serde(default)]
    pub site: SiteConfig,
    /// Optional transport settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

fn default_max_pages() -> u32 {
    1000
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            max_pages: default_max_pages(),
            site: SiteConfig::default(),
            http: None,
        }
    }
}

impl ScrapeConfig {
    pub fn http(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }

    /// Configured output dir, or `~/scrapetrain`.
    pub fn output_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.output_dir {
            return Ok(dir.clone());
        }
        default_output_dir()
    }
}

pub fn default_output_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot locate home directory"))?;
    Ok(home.join(DEFAULT_OUTPUT_SUBDIR))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("scrapetrain")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScrapeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScrapeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ScrapeConfig = toml::from_str(&data)?;
    Ok(cfg)
}
