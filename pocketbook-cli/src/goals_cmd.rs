use anyhow::{Result, bail};
use chrono::NaiveDate;
use pocketbook_api::{GoalPatch, GoalService, NewGoal, PagedList};

use crate::config::Config;
use crate::render;
use crate::state;

fn service(cfg: &Config) -> Result<GoalService> {
    Ok(GoalService::new(state::authed_client(cfg)?))
}

fn progress_bar(fraction: f64) -> String {
    let filled = (fraction * 20.0).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(20 - filled),
        fraction * 100.0
    )
}

pub async fn list(cfg: &Config, all: bool) -> Result<()> {
    let mut list = PagedList::new(service(cfg)?, ());
    list.mount().await?;
    if all {
        while list.load_more().await? {}
    }

    if list.items().is_empty() {
        println!("No goals yet. Create one: pocketbook goal add <name> <target>");
        return Ok(());
    }

    for g in list.items() {
        let deadline = g
            .deadline
            .map(|d| format!("  by {}", d))
            .unwrap_or_default();
        println!(
            "#{:<6} {:<24} {} {:>10.2} / {:>10.2}{}",
            g.id,
            g.name,
            progress_bar(g.progress()),
            g.saved_amount,
            g.target_amount,
            deadline
        );
    }

    if let Some(cursor) = list.cursor() {
        println!("\n{}", render::cursor_line(&cursor, list.items().len()));
        if !all && cursor.has_more() {
            println!("(more pages available; pass --all)");
        }
    }
    Ok(())
}

pub async fn add(cfg: &Config, name: String, target: f64, deadline: Option<NaiveDate>) -> Result<()> {
    let goal = NewGoal { name, target_amount: target, deadline };
    match service(cfg)?.create(&goal).await {
        Ok(g) => println!("Created goal #{} ({})", g.id, g.name),
        Err(err) => bail!("{}", render::explain_api_error(&err)),
    }
    Ok(())
}

pub async fn edit(
    cfg: &Config,
    id: i64,
    name: Option<String>,
    target: Option<f64>,
    saved: Option<f64>,
    deadline: Option<NaiveDate>,
) -> Result<()> {
    if name.is_none() && target.is_none() && saved.is_none() && deadline.is_none() {
        bail!("nothing to change; pass at least one field flag");
    }
    let patch = GoalPatch {
        name,
        target_amount: target,
        saved_amount: saved,
        deadline,
    };
    match service(cfg)?.update(id, &patch).await {
        Ok(g) => println!(
            "Updated goal #{} ({}), {:.0}% there",
            g.id,
            g.name,
            g.progress() * 100.0
        ),
        Err(err) => bail!("{}", render::explain_api_error(&err)),
    }
    Ok(())
}

pub async fn rm(cfg: &Config, id: i64) -> Result<()> {
    service(cfg)?.delete(id).await?;
    println!("Deleted goal #{}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), "[--------------------]   0%");
        assert_eq!(progress_bar(1.0), "[####################] 100%");
        assert!(progress_bar(0.5).starts_with("[##########----------]"));
    }
}
