use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use pocketbook_api::{
    NewPayment, NewPaymentItem, PagedList, PaymentItemsSource, PaymentPatch, PaymentService,
};

use crate::config::Config;
use crate::render;
use crate::state;

fn service(cfg: &Config) -> Result<PaymentService> {
    Ok(PaymentService::new(state::authed_client(cfg)?))
}

/// "name:amount[:quantity]"
fn parse_item_spec(spec: &str) -> Result<NewPaymentItem> {
    let mut parts = spec.splitn(3, ':');
    let name = parts.next().unwrap_or_default().trim();
    if name.is_empty() {
        bail!("item spec needs a name: {spec:?} (expected name:amount[:quantity])");
    }
    let amount: f64 = parts
        .next()
        .with_context(|| format!("item spec needs an amount: {spec:?}"))?
        .trim()
        .parse()
        .with_context(|| format!("bad amount in item spec {spec:?}"))?;
    let quantity: u32 = match parts.next() {
        Some(q) => q
            .trim()
            .parse()
            .with_context(|| format!("bad quantity in item spec {spec:?}"))?,
        None => 1,
    };
    Ok(NewPaymentItem { name: name.to_string(), amount, quantity })
}

#[allow(clippy::too_many_arguments)]
pub async fn add(
    cfg: &Config,
    name: String,
    amount: f64,
    kind: &str,
    date: Option<NaiveDate>,
    account: i64,
    scheduled: bool,
    notes: Option<String>,
    item_specs: &[String],
) -> Result<()> {
    let items = item_specs
        .iter()
        .map(|s| parse_item_spec(s))
        .collect::<Result<Vec<_>>>()?;

    let payment = NewPayment {
        name,
        amount,
        kind: kind.parse()?,
        date: date.unwrap_or_else(|| chrono::Local::now().date_naive()),
        account_id: account,
        is_scheduled: scheduled,
        notes,
        items,
    };

    match service(cfg)?.create(&payment).await {
        Ok(t) => {
            println!("Created payment #{} ({})", t.id, t.name);
            if t.has_items {
                println!("  with {} line item(s)", payment.items.len());
            }
        }
        Err(err) => bail!("{}", render::explain_api_error(&err)),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn edit(
    cfg: &Config,
    id: i64,
    name: Option<String>,
    amount: Option<f64>,
    date: Option<NaiveDate>,
    account: Option<i64>,
    scheduled: Option<bool>,
    notes: Option<String>,
) -> Result<()> {
    let patch = PaymentPatch {
        name,
        amount,
        date,
        account_id: account,
        is_scheduled: scheduled,
        notes,
    };
    if patch.is_empty() {
        bail!("nothing to change; pass at least one field flag");
    }

    match service(cfg)?.update(id, &patch).await {
        Ok(t) => println!("Updated payment #{} ({})", t.id, t.name),
        Err(err) => bail!("{}", render::explain_api_error(&err)),
    }
    Ok(())
}

pub async fn rm(cfg: &Config, id: i64) -> Result<()> {
    service(cfg)?.delete(id).await?;
    println!("Deleted payment #{}", id);
    Ok(())
}

pub async fn items(cfg: &Config, id: i64, all: bool) -> Result<()> {
    let source = PaymentItemsSource::new(service(cfg)?, id);
    let mut list = PagedList::new(source, ());
    list.mount().await?;
    if all {
        while list.load_more().await? {}
    }

    if list.items().is_empty() {
        println!("Payment #{} has no line items", id);
        return Ok(());
    }

    let mut total = 0.0;
    for item in list.items() {
        total += item.line_total();
        println!(
            "#{:<6} {:<30} {:>10.2} x{:<3} = {:>10.2}",
            item.id,
            item.name,
            item.amount,
            item.quantity,
            item.line_total()
        );
    }
    println!("{:>64.2}", total);

    if let Some(cursor) = list.cursor() {
        println!("\n{}", render::cursor_line(&cursor, list.items().len()));
        if !all && cursor.has_more() {
            println!("(more pages available; pass --all)");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_spec_full() {
        let item = parse_item_spec("Coffee beans:12.5:3").unwrap();
        assert_eq!(item.name, "Coffee beans");
        assert_eq!(item.amount, 12.5);
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_parse_item_spec_defaults_quantity() {
        let item = parse_item_spec("Filter:4.0").unwrap();
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_parse_item_spec_rejects_garbage() {
        assert!(parse_item_spec("no-amount").is_err());
        assert!(parse_item_spec(":5.0").is_err());
        assert!(parse_item_spec("x:abc").is_err());
        assert!(parse_item_spec("x:1.0:many").is_err());
    }
}
