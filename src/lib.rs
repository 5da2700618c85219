pub mod aggregate;
pub mod analysis;
pub mod config;
pub mod diff;
pub mod error;
pub mod loader;
pub mod navigator;
pub mod palette;
pub mod record;
pub mod roster;
pub mod weighting;
// cmd and reports are binary-only modules declared from main.rs.

pub use navigator::{build_levels, Level, Navigator, Slice};
pub use record::{Medal, Record};
pub use weighting::{TagWeights, WeightMode};
