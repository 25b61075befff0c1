use crate::output::{print_json, print_table};
use anyhow::Context;
use legis_core::bill::Bill;
use legis_core::config::Config;
use std::path::Path;

pub fn run(data: &Path, congress: Option<u16>, json: bool) -> anyhow::Result<()> {
    let bills = match congress {
        Some(c) => Bill::list_congress(data, c)
            .with_context(|| format!("failed to list bills of the {c}th congress"))?,
        None => Bill::list(data).context("failed to list bills")?,
    };

    if json {
        let summaries: Vec<_> = bills
            .iter()
            .map(|b| {
                serde_json::json!({
                    "id": b.id.to_string(),
                    "number": b.display_number(),
                    "congress": b.id.congress,
                    "status": b.current_status.to_string(),
                    "status_date": b.current_status_date.to_string(),
                    "title": b.title,
                })
            })
            .collect();
        return print_json(&summaries);
    }

    if bills.is_empty() {
        println!("No bills in the data set.");
        return Ok(());
    }

    let config = Config::load(data).context("failed to load config")?;
    let rows: Vec<Vec<String>> = bills
        .iter()
        .map(|b| {
            vec![
                b.id.to_string(),
                b.current_status.label().to_string(),
                if b.is_alive(config.current_congress) {
                    "yes".to_string()
                } else {
                    String::new()
                },
                b.title.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "STATUS", "ALIVE", "TITLE"], &rows);
    Ok(())
}
