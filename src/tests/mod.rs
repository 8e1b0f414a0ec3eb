//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the demo page the way a user would:
//! keystrokes, clicks and the passage of time.
