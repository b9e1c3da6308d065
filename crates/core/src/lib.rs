//! Core types and shared functionality for versebench.
//!
//! This crate provides:
//! - In-memory lyrics cache used by the cached benchmark variants
//! - The benchmark dataset (artist/song sweep)
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod dataset;
pub mod error;

pub use cache::{LyricsCache, cache_key};
pub use config::AppConfig;
pub use dataset::{TrackQuery, default_dataset};
pub use error::Error;
