use crate::output::{print_json, print_table_indented};
use anyhow::Context;
use legis_core::bill::{Bill, BillId};
use legis_core::describe;
use legis_core::events;
use legis_core::predict;
use std::path::Path;

pub fn run(data: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let id: BillId = id
        .parse()
        .with_context(|| format!("invalid bill id '{id}'"))?;
    let bill = Bill::load(data, &id).with_context(|| format!("failed to load bill '{id}'"))?;

    let past = events::major_events(&bill);
    let anticipated = predict::predict_future(&bill);

    if json {
        return print_json(&serde_json::json!({
            "id": bill.id.to_string(),
            "events": past,
            "anticipated": anticipated,
        }));
    }

    println!("{}", bill.display_title());
    println!();
    let rows: Vec<Vec<String>> = past
        .iter()
        .map(|event| vec![describe::long_date(event.date), event.label.clone()])
        .collect();
    print_table_indented(&["DATE", "ACTION"], &rows, 2);

    if !anticipated.is_empty() {
        println!();
        println!("Anticipated:");
        for step in &anticipated {
            println!("  - {step}");
        }
    }
    Ok(())
}
