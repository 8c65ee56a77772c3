//! Library entry for Blossi exposing core logic for integration tests.

pub mod app;
pub mod args;
pub mod catalog;
pub mod events;
pub mod logic;
pub mod state;
#[cfg(test)]
mod test_utils;
pub mod theme;
pub mod ui;
pub mod util;
