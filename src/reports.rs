use std::collections::BTreeSet;

use chrono::Datelike;

use crate::store::models::Donation;

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        let escaped = s.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        s.to_string()
    }
}

/// Donation history as CSV, one row per ledger entry in ledger order
/// (most recent first). Header row included.
pub fn export_donations_csv(ledger: &[Donation]) -> String {
    let mut w = String::new();
    w.push_str("id,date,campaign,amount\n");
    for d in ledger {
        let date = d.date.format("%Y-%m-%d").to_string();
        let amount = format!("{:.2}", d.amount);
        w.push_str(&format!(
            "{},{},{},{}\n",
            csv_escape(&d.id.to_string()),
            csv_escape(&date),
            csv_escape(&d.campaign),
            csv_escape(&amount),
        ));
    }
    w
}

/// Distinct years with at least one donation, newest first. Drives the year
/// filter in the history view.
pub fn available_years(ledger: &[Donation]) -> Vec<i32> {
    let mut year_set: BTreeSet<i32> = BTreeSet::new();
    for d in ledger {
        year_set.insert(d.date.year());
    }
    let mut years: Vec<i32> = year_set.into_iter().collect();
    years.reverse();
    years
}
