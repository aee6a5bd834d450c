//! # client
//!
//! Leptos + WASM frontend for the Zenith design tool.
//!
//! This crate contains pages, components, mocked application state, and the
//! `CanvasHost` bridge that wires DOM events into the imperative
//! `canvas::Engine`. All data is held in-memory; there is no backend.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;
