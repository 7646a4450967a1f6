use anyhow::{Context, Result};
use chrono::NaiveDate;
use pocketbook_api::{PagedList, TransactionService};
use pocketbook_core::{PageCursor, Transaction, TransactionFilter};
use std::path::Path;

use crate::config::Config;
use crate::render;
use crate::state;

/// Shared filter flags for listing, export, and reports
#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// income | expense | transfer | withdrawal
    #[arg(long)]
    pub kind: Option<String>,

    /// Restrict to one account id
    #[arg(long)]
    pub account: Option<i64>,

    /// Free-text search over names and notes
    #[arg(long)]
    pub search: Option<String>,
}

pub fn build_filter(args: &FilterArgs) -> Result<TransactionFilter> {
    let kind = match &args.kind {
        Some(s) => Some(s.parse()?),
        None => None,
    };
    Ok(TransactionFilter {
        date_from: args.from,
        date_to: args.to,
        kind,
        account_id: args.account,
        search: args.search.clone(),
    })
}

fn service(cfg: &Config) -> Result<TransactionService> {
    Ok(TransactionService::new(state::authed_client(cfg)?).with_per_page(cfg.list.per_page))
}

pub async fn list(cfg: &Config, args: &FilterArgs, all: bool, page: Option<u32>) -> Result<()> {
    let filter = build_filter(args)?;
    let service = service(cfg)?;

    if let Some(page) = page {
        let page = service.list(page, &filter).await?;
        print_listing(&page.items, Some(page.cursor), filter.is_active());
        return Ok(());
    }

    let mut list = PagedList::new(service, filter);
    list.mount().await?;
    if all {
        while list.load_more().await? {}
    }

    print_listing(list.items(), list.cursor(), list.filter().is_active());
    if !all && list.cursor().is_some_and(|c| c.has_more()) {
        println!("\n(more pages available; pass --all or --page N)");
    }
    Ok(())
}

fn print_listing(items: &[Transaction], cursor: Option<PageCursor>, filtered: bool) {
    if filtered {
        println!("(filter active)\n");
    }
    if items.is_empty() {
        println!("No transactions found");
    }
    for t in items {
        println!("{}", render::transaction_row(t));
    }
    if let Some(cursor) = cursor {
        println!("\n{}", render::cursor_line(&cursor, items.len()));
    }
}

pub async fn show(cfg: &Config, id: i64) -> Result<()> {
    let t = service(cfg)?.get(id).await?;
    println!("Payment #{}", t.id);
    println!("  name:      {}", t.name);
    println!("  amount:    {:.2}", t.amount);
    println!("  kind:      {}", t.kind.as_str());
    println!("  date:      {}", t.date);
    println!("  account:   #{}", t.account_id);
    println!("  scheduled: {}", t.is_scheduled);
    println!("  has items: {}", t.has_items);
    if let Some(notes) = &t.notes {
        println!("  notes:     {}", notes);
    }
    Ok(())
}

pub async fn export(cfg: &Config, args: &FilterArgs, out: &Path) -> Result<()> {
    let filter = build_filter(args)?;
    let mut list = PagedList::new(service(cfg)?, filter);
    list.mount().await?;
    while list.load_more().await? {}

    let mut wtr = csv::Writer::from_path(out)
        .with_context(|| format!("create {}", out.display()))?;
    wtr.write_record(["id", "date", "kind", "name", "amount", "account_id", "scheduled", "notes"])?;
    for t in list.items() {
        wtr.write_record([
            t.id.to_string(),
            t.date.to_string(),
            t.kind.as_str().to_string(),
            t.name.clone(),
            format!("{:.2}", t.amount),
            t.account_id.to_string(),
            t.is_scheduled.to_string(),
            t.notes.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;

    println!("Wrote {} transactions to {}", list.items().len(), out.display());
    Ok(())
}
