//! Display formatting for terminal output
//!
//! Plain-text tables for the command-line report and the category listing.

pub mod categories;
pub mod dashboard;
pub mod report;

pub use categories::format_category_list;
pub use dashboard::format_dashboard;
