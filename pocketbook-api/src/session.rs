//! Session lifecycle: load persisted token -> active -> cleared.
//!
//! The session is an explicit value handed to `ApiClient`, never ambient
//! state. `SessionStore` persists it as JSON in a caller-supplied directory;
//! the CLI reads it once at startup, writes it on login, and deletes it on
//! logout.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    pub fn activate(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store backed by `<dir>/session.json`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join("session.json"),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the persisted session; an absent file is an empty session
    pub fn load(&self) -> Result<Session> {
        if !self.path.exists() {
            return Ok(Session::default());
        }
        let s = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        Ok(serde_json::from_str(&s)?)
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        let s = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, s).with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }

    /// Forget the persisted session (logout)
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("remove {}", self.path.display()))?;
        }
        Ok(())
    }
}
