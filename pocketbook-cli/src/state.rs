use anyhow::{Context, Result};
use pocketbook_api::{ApiClient, ApiError, SessionStore};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;

pub fn pocketbook_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".pocketbook"))
}

pub fn ensure_pocketbook_home() -> Result<PathBuf> {
    let dir = pocketbook_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn session_store() -> Result<SessionStore> {
    Ok(SessionStore::new(ensure_pocketbook_home()?))
}

/// Client carrying the persisted session token; refuses to build without one
pub fn authed_client(cfg: &Config) -> Result<ApiClient> {
    let session = session_store()?.load()?;
    if !session.is_active() {
        return Err(ApiError::NotAuthenticated).context("run: pocketbook login");
    }
    Ok(ApiClient::new(&cfg.api.base_url, &session))
}
