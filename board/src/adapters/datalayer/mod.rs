//! Data layer adapter
//!
//! Implementation of the analytics sink as an in-process event queue.

pub mod client;

pub use client::{DataLayer, NoopAnalyticsSink};
