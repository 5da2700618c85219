pub mod analysis;
pub mod convert;
pub mod diff;
pub mod explore;
pub mod styles;
