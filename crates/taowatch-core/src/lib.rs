//! Core domain types for the taowatch subnet monitor.
//!
//! This crate provides the types shared by the gateway and the view model:
//! - `SubnetRecord`: one upstream-reported subnet with market/price metrics
//! - `Metric`: tolerant wrapper for loosely-typed upstream field values
//! - `SortKey`/`SortDirection`: table column identifiers and sort state
//! - Display formatting rules (unit scaling, precision, grouping)

pub mod columns;
pub mod error;
pub mod format;
pub mod metric;
pub mod record;

pub use columns::{SortDirection, SortKey};
pub use error::{CoreError, Result};
pub use format::{format_magnitude, format_percent, format_price};
pub use metric::Metric;
pub use record::{PricePoint, RowKey, SubnetRecord};
