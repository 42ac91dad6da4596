//! Aggregation and formatting services.

pub mod format;
pub mod loader;
pub mod results;
pub mod stats;
pub mod summary;

pub use format::{as_delta, as_stat_duration, as_stat_number, get_formatted_digits};
pub use loader::{load_parsed_results, load_reference_stats};
pub use results::{build_suite_stats, get_test_results};
pub use stats::{get_stats, get_stats_with_delta};
pub use summary::{get_long_summary_md, get_short_summary_md};
