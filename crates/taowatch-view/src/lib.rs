//! taowatch-view - client-side view model for the subnet table.
//!
//! Owns the fetched record set plus sort and selection state, and derives
//! renderable projections from it:
//!
//! - `ViewModel`: records / sort key / direction / selection / loading,
//!   with `refresh` going through a pluggable `SubnetSource`
//! - `projection()`: stably-sorted, unit-normalized table rows
//! - `detail()`: headline fields plus the raw 7-day trend for the chart
//!
//! The rendering layer is a pure sink for these projections; it holds no
//! state of its own.

mod error;
mod projection;
mod sort;
mod source;
mod state;

pub use error::{SourceError, SourceResult};
pub use projection::{ChangeTone, DetailView, DisplayRow};
pub use sort::{compare_values, sorted_indices};
pub use source::{HttpSubnetSource, SubnetSource};
pub use state::ViewModel;
