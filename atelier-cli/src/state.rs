use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use atelier_core::{BoundedLedger, DEFAULT_LEDGER_CAP};

pub fn atelier_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".atelier"))
}

pub fn ensure_atelier_home() -> Result<PathBuf> {
    let dir = atelier_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn ledger_path() -> Result<PathBuf> {
    Ok(ensure_atelier_home()?.join("notified.json"))
}

/// Load the persisted notification ledger: a JSON array of task ids, oldest
/// first. Missing file means an empty ledger.
pub fn load_ledger() -> Result<BoundedLedger> {
    let p = ledger_path()?;
    if !p.exists() {
        return Ok(BoundedLedger::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    let ids: Vec<String> =
        serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    Ok(BoundedLedger::from_ids(DEFAULT_LEDGER_CAP, ids))
}

pub fn save_ledger(ledger: &BoundedLedger) -> Result<()> {
    let p = ledger_path()?;
    let json = serde_json::to_string_pretty(&ledger.ids())?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn clear_ledger() -> Result<()> {
    let p = ledger_path()?;
    if p.exists() {
        fs::remove_file(&p).with_context(|| format!("remove {}", p.display()))?;
    }
    Ok(())
}
