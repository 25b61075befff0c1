use crate::output::{print_json, print_table};
use legis_core::status::BillStatus;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        let entries: Vec<_> = BillStatus::all()
            .iter()
            .map(|s| {
                serde_json::json!({
                    "code": s.value(),
                    "name": s.to_string(),
                    "label": s.label(),
                    "xml_code": s.xml_code(),
                    "final": s.is_final(),
                    "enacted": s.is_enacted(),
                })
            })
            .collect();
        return print_json(&entries);
    }

    let rows: Vec<Vec<String>> = BillStatus::all()
        .iter()
        .map(|s| {
            vec![
                s.value().to_string(),
                s.to_string(),
                s.label().to_string(),
                if s.is_final() {
                    "final".to_string()
                } else {
                    String::new()
                },
            ]
        })
        .collect();
    print_table(&["CODE", "NAME", "LABEL", "STAGE"], &rows);
    Ok(())
}
