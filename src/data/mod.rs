//! Country data: records, loading, and aggregation into chart series.
//!
//! - `Country`: one row of the restcountries v2 dataset
//! - `DataSource`: where the dataset comes from (a JSON file or a URL)
//! - `Series`: a labeled list of values ready for a bar chart

mod aggregate;
mod country;
mod error;
mod loader;

pub use aggregate::{RegionTotal, Series, countries_in_region, population_by_region};
pub use country::Country;
pub use error::DataError;
pub use loader::{DEFAULT_DATA_URL, DataSource, parse_countries};
