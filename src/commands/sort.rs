//! Sort command: run one interactive sorting session

use console::Style;

use crate::bundle_log::BundleLog;
use crate::cli::ConfigArgs;
use crate::config::SorterConfig;
use crate::error::Result;
use crate::operator::TerminalOperator;
use crate::scan::discover_scans;
use crate::session::{Session, SessionSummary};

pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = SorterConfig::resolve(args)?;

    let scans = discover_scans(&config.input_dir)?;
    if scans.is_empty() {
        println!("No scans found in {}", config.input_dir.display());
        return Ok(());
    }
    println!(
        "Found {} scan(s) in {}",
        scans.len(),
        config.input_dir.display()
    );

    let log = config.bundle_log();
    let mut operator = TerminalOperator::new();
    let summary = Session::new(
        &mut operator,
        &log,
        &config.output_dir,
        config.viewer.as_deref(),
    )
    .run(&scans)?;

    print_summary(&summary, &config, &log);
    Ok(())
}

fn print_summary(summary: &SessionSummary, config: &SorterConfig, log: &BundleLog) {
    let header = Style::new().green().bold();
    println!();
    println!(
        "{} {} scan(s) into {} bundle(s)",
        header.apply_to("Sorted"),
        summary.scans_processed(),
        summary.bundles.len()
    );
    println!("  Archive: {}", config.output_dir.display());
    println!("  Log:     {}", log.primary().display());
}
