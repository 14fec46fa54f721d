//! Shared library surface for wayfinder server utilities and tests.

pub mod api;
pub mod config;
pub mod narration;
pub mod session;
pub mod state;
