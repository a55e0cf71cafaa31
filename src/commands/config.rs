//! Config command: print the effective configuration

use crate::cli::ConfigArgs;
use crate::config::{SorterConfig, default_config_path};
use crate::error::Result;

pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = SorterConfig::resolve(args)?;
    let source = args
        .config
        .clone()
        .or_else(|| default_config_path().filter(|p| p.is_file()));
    match source {
        Some(path) => println!("# Loaded from {}", path.display()),
        None => println!("# No configuration file; built-in defaults"),
    }
    print!("{}", config.to_yaml()?);
    Ok(())
}
