use crate::output::print_json;
use anyhow::Context;
use legis_core::bill::{Bill, BillId};
use legis_core::config::Config;
use legis_core::describe;
use std::path::Path;

pub fn run(data: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let id: BillId = id
        .parse()
        .with_context(|| format!("invalid bill id '{id}'"))?;
    let bill = Bill::load(data, &id).with_context(|| format!("failed to load bill '{id}'"))?;

    if json {
        return print_json(&bill);
    }

    let config = Config::load(data).context("failed to load config")?;

    println!(
        "Bill:       {}",
        bill.display_number_in(config.current_congress)
    );
    println!("Title:      {}", bill.title);
    if let Some(sponsor) = &bill.sponsor {
        println!("Sponsor:    {}", sponsor.name());
    }
    println!(
        "Status:     {} ({})",
        bill.current_status.label(),
        describe::long_date(bill.current_status_date)
    );
    println!(
        "Introduced: {}",
        describe::long_date(bill.introduced_date)
    );
    println!(
        "Alive:      {}",
        if bill.is_alive(config.current_congress) {
            "yes"
        } else {
            "no"
        }
    );
    println!("URL:        {}", bill.url_path());
    println!("THOMAS:     {}", bill.thomas_link());

    if !bill.committees.is_empty() {
        println!();
        println!("Committees:");
        for committee in &bill.committees {
            println!("  - {committee}");
        }
    }

    let cosponsors = bill.cosponsor_records();
    if !cosponsors.is_empty() {
        println!();
        println!("Cosponsors ({}):", bill.cosponsor_count());
        for cosponsor in cosponsors {
            let mark = if cosponsor.is_active() {
                ""
            } else {
                " (withdrawn)"
            };
            println!("  - {}{mark}", cosponsor.person.name());
        }
    }

    let terms = bill.sorted_terms();
    if !terms.is_empty() {
        println!();
        println!("Subjects:");
        for term in terms {
            let mark = if term.top_term { " (top term)" } else { "" };
            println!("  - {}{mark}", term.name);
        }
    }

    let related = bill.related_bills();
    if !related.is_empty() {
        println!();
        println!("Related bills:");
        for r in related {
            println!("  - {} ({})", r.bill, r.relation);
        }
    }

    println!();
    println!(
        "{}",
        bill.current_status_description(config.current_congress)
    );
    Ok(())
}
