//! Summary integration test suite.
//!
//! Runs parsed results through reduction, stats building, delta comparison
//! and rendering, the way the binary does.
//!
//! Run with: cargo test --test summary

mod test_helpers;

mod test_json_shape;
mod test_pipeline;
