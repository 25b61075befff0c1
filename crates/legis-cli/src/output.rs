use serde::Serialize;

/// Pretty-print any serializable value as JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a padded text table with a dashed rule under the header row.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    print_table_indented(headers, rows, 0);
}

pub fn print_table_indented(headers: &[&str], rows: &[Vec<String>], indent: usize) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let pad = " ".repeat(indent);
    let render = |cells: &[String]| -> String {
        let formatted: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{cell:<w$}")
            })
            .collect();
        format!("{pad}{}", formatted.join("  ").trim_end())
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    println!("{}", render(&header_cells));
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", render(&rule));
    for row in rows {
        println!("{}", render(row));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
