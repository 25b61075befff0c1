use crate::output::{print_json, print_table};
use legis_core::types::BillType;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        let entries: Vec<_> = BillType::all()
            .iter()
            .map(|t| {
                serde_json::json!({
                    "code": t.value(),
                    "name": t.to_string(),
                    "citation": t.label(),
                    "slug": t.slug(),
                    "xml_code": t.xml_code(),
                    "chamber": t.chamber().to_string(),
                    "description": t.description(),
                })
            })
            .collect();
        return print_json(&entries);
    }

    let rows: Vec<Vec<String>> = BillType::all()
        .iter()
        .map(|t| {
            vec![
                t.value().to_string(),
                t.to_string(),
                t.label().to_string(),
                t.slug().to_string(),
                t.chamber().label().to_string(),
            ]
        })
        .collect();
    print_table(&["CODE", "NAME", "CITATION", "SLUG", "CHAMBER"], &rows);
    Ok(())
}
