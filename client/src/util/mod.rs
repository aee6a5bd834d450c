//! Shared utilities for the client crate.

pub mod canvas_input;
pub mod theme;
