//! Wayfinder CLI - command line tools for the wayfinder system.
//!
//! This crate provides two binaries:
//! - plan_route: offline route planner against the built-in catalog
//! - walk_session: drives a full navigation session against a running server

pub mod client;

pub use client::{SessionSnapshot, WayfinderClient};
