//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Terminal-state detection
//! - `eval.rs` - Heuristic evaluation
//! - `search.rs` - Move selection
//! - `restore.rs` - Place/undo discipline and board restoration
//! - `proptest.rs` - Property-based tests
