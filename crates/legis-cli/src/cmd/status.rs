use crate::output::print_json;
use anyhow::Context;
use legis_core::bill::{Bill, BillId};
use legis_core::config::Config;
use std::path::Path;

pub fn run(data: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let id: BillId = id
        .parse()
        .with_context(|| format!("invalid bill id '{id}'"))?;
    let bill = Bill::load(data, &id).with_context(|| format!("failed to load bill '{id}'"))?;
    let config = Config::load(data).context("failed to load config")?;

    let text = bill.current_status_description(config.current_congress);

    if json {
        return print_json(&serde_json::json!({
            "id": bill.id.to_string(),
            "status": bill.current_status.to_string(),
            "label": bill.current_status.label(),
            "date": bill.current_status_date.to_string(),
            "final": bill.current_status.is_final(),
            "text": text,
        }));
    }

    println!("{}", bill.display_title());
    println!();
    println!("{text}");
    Ok(())
}
