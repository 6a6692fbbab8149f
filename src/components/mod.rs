//! UI Components
//!
//! Table views and their controls.

mod record_table;
mod comparison_table;
mod comparison_row;
mod filter_select;
mod status_line;

pub use record_table::RecordTable;
pub use comparison_table::ComparisonTable;
pub use comparison_row::ComparisonRow;
pub use filter_select::FilterSelect;
pub use status_line::StatusLine;
