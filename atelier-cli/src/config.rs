use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use atelier_core::DEFAULT_UPCOMING_WINDOW_DAYS;

use crate::state::ensure_atelier_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiSection,
    pub shop: ShopSection,
    pub notify: NotifySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: String,
    /// Bearer key for the backend. Empty means unauthenticated (dev server).
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSection {
    /// IANA timezone the shop operates in; "today" is resolved here.
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifySection {
    pub upcoming_window_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiSection {
                base_url: "http://localhost:8090/api".to_string(),
                api_key: String::new(),
            },
            shop: ShopSection {
                timezone: "America/Chicago".to_string(),
            },
            notify: NotifySection {
                upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
            },
        }
    }
}

impl Config {
    pub fn shop_tz(&self) -> Result<Tz> {
        self.shop
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid timezone in config: {}", self.shop.timezone))
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_atelier_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let cfg = Config::default();
    save_config(&cfg)?;
    println!("Wrote {}", p.display());
    Ok(())
}
