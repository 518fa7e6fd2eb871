//! Dataset acquisition and preparation.
//!
//! Records come from the REST Countries API (population) or the
//! built-in table (sales). Either way they pass through the same
//! preparation step before rendering.

pub mod countries;

mod builtin;
mod fetch;

pub use builtin::builtin_sales_records;
pub use countries::{CountryRecord, PreparedDataset};
pub use fetch::{FetchChannel, FetchResult};
