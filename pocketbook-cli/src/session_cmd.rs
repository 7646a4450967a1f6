use anyhow::{Result, anyhow};
use pocketbook_api::{ApiClient, AuthService};
use std::io::{self, Write};
use tracing::warn;

use crate::config::Config;
use crate::render;
use crate::state;

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

pub async fn login(cfg: &Config, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => prompt("Email")?,
    };
    // Minimal portable prompt: plain stdin, same as the email.
    let password = prompt("Password")?;

    let client = ApiClient::anonymous(&cfg.api.base_url);
    let session = AuthService::new(client)
        .login(&email, &password)
        .await
        .map_err(|e| anyhow!("{}", render::explain_api_error(&e)))?;

    let store = state::session_store()?;
    store.save(&session)?;

    let name = session
        .user
        .as_ref()
        .map(|u| u.name.as_str())
        .unwrap_or("user");
    println!("Logged in as {}. Session saved to {}", name, store.path().display());
    Ok(())
}

pub async fn logout(cfg: &Config) -> Result<()> {
    let store = state::session_store()?;
    let session = store.load()?;

    if session.is_active() {
        let client = ApiClient::new(&cfg.api.base_url, &session);
        // Local clear happens regardless; a dead token server-side is the
        // server's problem to expire.
        if let Err(err) = AuthService::new(client).logout().await {
            warn!("server-side logout failed: {err}");
        }
    }

    store.clear()?;
    println!("Logged out");
    Ok(())
}

pub async fn whoami(cfg: &Config) -> Result<()> {
    let client = state::authed_client(cfg)?;
    let user = AuthService::new(client).profile().await?;
    println!("{} <{}>", user.name, user.email);
    Ok(())
}
