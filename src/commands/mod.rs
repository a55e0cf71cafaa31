//! Command implementations for the blueprint sorter CLI

pub mod completions;
pub mod config;
pub mod history;
pub mod sort;
pub mod version;
