//! Client code for versebench.
//!
//! This crate provides the HTTP transport seam, lyrics page address
//! construction, content-block extraction, and the fetch-parse-extract-cache
//! routine the benchmarks and CLI drive.

pub mod extract;
pub mod fetch;
pub mod lyrics;

pub use extract::extract_longest_block;
pub use fetch::{FetchConfig, FetchResponse, HttpTransport, Transport, lyrics_url};
pub use lyrics::LyricsFetcher;
