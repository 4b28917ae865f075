//! In-memory adapter
//!
//! A document tree held in process memory.

pub mod document;

pub use document::{InMemoryDocument, MemoryContainer};
