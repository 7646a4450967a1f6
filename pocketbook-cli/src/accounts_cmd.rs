use anyhow::{Result, bail};
use pocketbook_api::{AccountPatch, AccountService, NewAccount};
use pocketbook_core::Account;

use crate::config::Config;
use crate::render;
use crate::state;

fn service(cfg: &Config) -> Result<AccountService> {
    Ok(AccountService::new(state::authed_client(cfg)?))
}

fn print_account(a: &Account) {
    println!("#{:<6} {:<10} {:>12.2}  {}", a.id, a.kind.as_str(), a.balance, a.name);
}

pub async fn list(cfg: &Config) -> Result<()> {
    let accounts = service(cfg)?.list().await?;
    if accounts.is_empty() {
        println!("No accounts yet. Create one: pocketbook account add <name>");
        return Ok(());
    }
    let mut total = 0.0;
    for a in &accounts {
        total += a.balance;
        print_account(a);
    }
    println!("\nTotal balance: {:.2}", total);
    Ok(())
}

pub async fn show(cfg: &Config, id: i64) -> Result<()> {
    let a = service(cfg)?.get(id).await?;
    print_account(&a);
    Ok(())
}

pub async fn add(cfg: &Config, name: String, kind: &str, balance: f64) -> Result<()> {
    let account = NewAccount { name, kind: kind.parse()?, balance };
    match service(cfg)?.create(&account).await {
        Ok(a) => println!("Created account #{} ({})", a.id, a.name),
        Err(err) => bail!("{}", render::explain_api_error(&err)),
    }
    Ok(())
}

pub async fn edit(cfg: &Config, id: i64, name: Option<String>, kind: Option<&str>) -> Result<()> {
    let kind = match kind {
        Some(s) => Some(s.parse()?),
        None => None,
    };
    if name.is_none() && kind.is_none() {
        bail!("nothing to change; pass --name and/or --kind");
    }
    let patch = AccountPatch { name, kind };
    match service(cfg)?.update(id, &patch).await {
        Ok(a) => println!("Updated account #{} ({})", a.id, a.name),
        Err(err) => bail!("{}", render::explain_api_error(&err)),
    }
    Ok(())
}

pub async fn rm(cfg: &Config, id: i64) -> Result<()> {
    service(cfg)?.delete(id).await?;
    println!("Deleted account #{}", id);
    Ok(())
}
