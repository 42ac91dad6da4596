//! Domain models for test result summaries.

pub mod case_record;
pub mod delta;
pub mod stats;
pub mod summary_stats;
pub mod test_results;

// Re-export commonly used types
pub use case_record::{CaseOutcome, CaseRecord, ParsedResults};
pub use delta::{DurationDelta, Numeric, UnitTestRunDeltaStats};
pub use stats::{UnitTestRunStats, UnitTestSuiteStats};
pub use summary_stats::{DurationInput, NumericInput, SummaryStats};
pub use test_results::TestResults;
