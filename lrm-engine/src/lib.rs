//! Filter/aggregate engine for landslide risk records.
//!
//! Given the full record set and the active filter selection this crate
//! produces the filtered subset, per-risk counts, the option lists for each
//! filter control and pages of the filtered subset. [`Dashboard`] ties these
//! together with the selected record and the map view it implies.

pub mod aggregate;
pub mod dashboard;
pub mod filter;
pub mod load;
pub mod map;
pub mod options;
pub mod pagination;

pub use aggregate::RiskCounts;
pub use dashboard::{Dashboard, Page, RecordId, NO_DATA_MESSAGE};
pub use filter::{Choice, FilterSelection};
pub use load::{LoadState, FETCH_ERROR_MESSAGE};
pub use map::{MapView, Marker};
pub use options::FilterOptions;
pub use pagination::ITEMS_PER_PAGE;
