//! History command: list bundles recorded in the log

use std::fmt::Write;

use console::Style;

use crate::bundle_log::read_records;
use crate::cli::{ConfigArgs, HistoryArgs};
use crate::config::SorterConfig;
use crate::domain::BundleRecord;
use crate::error::Result;

pub fn run(config_args: &ConfigArgs, args: &HistoryArgs) -> Result<()> {
    let config = SorterConfig::resolve(config_args)?;
    let path = if args.backup {
        &config.backup_log_file
    } else {
        &config.log_file
    };

    let records = read_records(path)?;
    if records.is_empty() {
        println!("No bundles logged in {}", path.display());
        return Ok(());
    }

    for record in &records {
        print!("{}", format_record(record, args.detailed));
    }
    let pages: u64 = records.iter().map(|r| u64::from(r.pages)).sum();
    println!();
    println!("{} bundle(s), {pages} page(s)", records.len());
    Ok(())
}

fn format_record(record: &BundleRecord, detailed: bool) -> String {
    let name = Style::new().cyan().bold();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}  {:<24}  {} page(s)",
        name.apply_to(record.uuid),
        record.date,
        record.building,
        record.pages
    );
    if detailed {
        for (page, title) in &record.contents {
            let _ = writeln!(out, "    {page:>3}. {title}");
        }
    }
    out
}
