//! Record-level views behind the time and near-miss charts.

pub mod near_miss;
pub mod stretch;
pub mod timing;
