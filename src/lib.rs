//! adamui
//!
//! Terminal UI widgets (an animated search bar with autocomplete and a
//! collapsible timeline) plus the `adamui` CLI that installs their sources
//! into a host project.
//!
//! Widget state machines in [`state`] are pure; [`view`] renders them with
//! ratatui and hosts the interactive demo.

pub mod config;
pub mod installer;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
