use anyhow::{Context, Result, bail};
use pocketbook_api::AttachmentService;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::render;
use crate::state;

fn service(cfg: &Config) -> Result<AttachmentService> {
    Ok(AttachmentService::new(state::authed_client(cfg)?))
}

pub async fn upload(cfg: &Config, tx: i64, file: &Path) -> Result<()> {
    let bytes = fs::read(file).with_context(|| format!("read {}", file.display()))?;
    let filename = file
        .file_name()
        .and_then(|n| n.to_str())
        .context("file name is not valid UTF-8")?;

    match service(cfg)?.upload(tx, filename, &bytes).await {
        Ok(a) => println!(
            "Uploaded {} ({} bytes) to payment #{} as attachment #{}",
            a.filename,
            bytes.len(),
            tx,
            a.id
        ),
        Err(err) => bail!("{}", render::explain_api_error(&err)),
    }
    Ok(())
}

pub async fn list(cfg: &Config, tx: i64) -> Result<()> {
    let attachments = service(cfg)?.list(tx).await?;
    if attachments.is_empty() {
        println!("Payment #{} has no attachments", tx);
        return Ok(());
    }
    for a in &attachments {
        let url = a.url.as_deref().unwrap_or("-");
        println!(
            "#{:<6} {:<30} {:<20} {:>10}  {}",
            a.id, a.filename, a.content_type, a.size_bytes, url
        );
    }
    Ok(())
}

pub async fn rm(cfg: &Config, id: i64) -> Result<()> {
    service(cfg)?.delete(id).await?;
    println!("Deleted attachment #{}", id);
    Ok(())
}
