use anyhow::Result;
use pocketbook_api::ReportService;

use crate::config::Config;
use crate::state;
use crate::transactions_cmd::{FilterArgs, build_filter};

pub async fn summary(cfg: &Config, args: &FilterArgs) -> Result<()> {
    let filter = build_filter(args)?;
    let service = ReportService::new(state::authed_client(cfg)?);
    let summary = service.summary(&filter).await?;

    println!("# Summary\n");
    if let (Some(from), Some(to)) = (filter.date_from, filter.date_to) {
        println!("{} to {}\n", from, to);
    }
    println!("  income:   {:>12.2}", summary.income_total);
    println!("  expenses: {:>12.2}", summary.expense_total);
    println!("  net:      {:>12.2}", summary.net);

    if !summary.by_kind.is_empty() {
        println!("\nBy kind:");
        for row in &summary.by_kind {
            println!(
                "  {:<12} {:>12.2}  ({} transactions)",
                row.kind.as_str(),
                row.total,
                row.count
            );
        }
    }
    Ok(())
}
