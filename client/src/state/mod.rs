//! Reactive application state, provided as `RwSignal` contexts by `App`.

pub mod editor;
pub mod files;
pub mod session;
pub mod view;
