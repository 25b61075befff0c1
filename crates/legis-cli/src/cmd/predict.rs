use crate::output::print_json;
use anyhow::Context;
use legis_core::bill::{Bill, BillId};
use legis_core::predict;
use std::path::Path;

pub fn run(data: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let id: BillId = id
        .parse()
        .with_context(|| format!("invalid bill id '{id}'"))?;
    let bill = Bill::load(data, &id).with_context(|| format!("failed to load bill '{id}'"))?;

    let steps = predict::predict_future(&bill);

    if json {
        return print_json(&serde_json::json!({
            "id": bill.id.to_string(),
            "status": bill.current_status.to_string(),
            "steps": steps,
        }));
    }

    println!("{}", bill.display_title());
    println!();
    if steps.is_empty() {
        println!("No further major action is anticipated.");
    } else {
        println!("Anticipated next steps:");
        for step in &steps {
            println!("  - {step}");
        }
    }
    Ok(())
}
