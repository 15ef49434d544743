//! Integration test suite for end-to-end scenarios.

#[path = "cli/smoke_tests.rs"]
mod smoke_tests;
#[path = "integration/end_to_end.rs"]
mod end_to_end;
