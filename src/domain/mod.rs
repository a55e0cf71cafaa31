//! Domain types for the sorting session
//!
//! - [`blueprint`]: one scanned page
//! - [`building`]: the closed building menu
//! - [`date`]: validated cover sheet dates
//! - [`bundle`]: the bundle aggregate and its log record

pub mod blueprint;
pub mod building;
pub mod bundle;
pub mod date;

pub use blueprint::BlueprintDescriptor;
pub use building::Building;
pub use bundle::{BundleAggregate, BundleRecord, FinalizedBundle};
pub use date::BundleDate;
