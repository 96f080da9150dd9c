// Core model for the baby names explorer.
// Shared by the terminal UI and the web dashboard; performs no I/O.

pub mod catalog;
pub mod chart;
pub mod endpoint;
pub mod error;
pub mod record;
pub mod view;

pub use catalog::NameCatalog;
pub use chart::{normalize, RankChart, YearBar, YEAR_AXIS};
pub use error::FetchError;
pub use record::{parse_records, NameRecord};
pub use view::{NamesView, Selection};
