//! Client for the external spatial-advice source.

pub mod client;

pub use client::AdviceClient;
