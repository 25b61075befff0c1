use crate::output::{print_json, print_table};
use anyhow::Context;
use legis_core::bill::{Bill, BillId};
use std::path::Path;

pub fn run(data: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let id: BillId = id
        .parse()
        .with_context(|| format!("invalid bill id '{id}'"))?;
    let bill = Bill::load(data, &id).with_context(|| format!("failed to load bill '{id}'"))?;

    let related = bill.related_bills();

    if json {
        let entries: Vec<_> = related
            .iter()
            .map(|r| {
                serde_json::json!({
                    "bill": r.bill.to_string(),
                    "relation": r.relation,
                })
            })
            .collect();
        return print_json(&entries);
    }

    if related.is_empty() {
        println!("No related bills.");
        return Ok(());
    }

    // Titles come along when the related bill happens to be in the data set.
    let rows: Vec<Vec<String>> = related
        .iter()
        .map(|r| {
            let title = Bill::load(data, &r.bill)
                .map(|b| b.title)
                .unwrap_or_default();
            vec![r.relation.clone(), r.bill.to_string(), title]
        })
        .collect();
    print_table(&["RELATION", "BILL", "TITLE"], &rows);
    Ok(())
}
