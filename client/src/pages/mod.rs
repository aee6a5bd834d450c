//! One module per routed page.

pub mod dashboard;
pub mod editor;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod prototype;
pub mod registration;
pub mod share;
