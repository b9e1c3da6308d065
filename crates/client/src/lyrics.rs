//! The fetch-parse-extract-cache routine, in both task shapes.
//!
//! `fetch` is a plain `async fn`, so callers await an unboxed,
//! stack-composed future; `fetch_boxed` pins the same routine on the heap
//! as a `BoxFuture`. The benchmarks time one against the other, with and
//! without the memoization cache.
//!
//! Control flow per invocation is strictly linear: check cache, build
//! address, one GET, branch on status, extract, populate cache, return.
//! There is no retry, no cancellation, and no concurrent fetching here.

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use versebench_core::{Error, LyricsCache, cache_key};

use crate::extract::extract_longest_block;
use crate::fetch::{Transport, lyrics_url};

/// Fetches lyrics pages and extracts the lyrics text, optionally memoizing
/// results.
///
/// Cached and uncached benchmark variants are separate instances: a
/// fetcher built with [`LyricsFetcher::with_cache`] owns its own cache for
/// its whole lifetime, one built with [`LyricsFetcher::new`] never
/// consults one. Nothing is shared between variants.
pub struct LyricsFetcher<T: Transport> {
    transport: T,
    base_url: String,
    cache: Option<LyricsCache>,
}

impl<T: Transport> LyricsFetcher<T> {
    /// Uncached fetcher: every call goes to the network.
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self { transport, base_url: base_url.into(), cache: None }
    }

    /// Cached fetcher with its own fresh cache instance.
    pub fn with_cache(transport: T, base_url: impl Into<String>) -> Self {
        Self { transport, base_url: base_url.into(), cache: Some(LyricsCache::new()) }
    }

    /// Number of memoized entries; zero for uncached fetchers.
    pub fn cached_entries(&self) -> usize {
        self.cache.as_ref().map_or(0, LyricsCache::len)
    }

    /// Get reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the lyrics for an (artist, song) pair.
    ///
    /// Returns the trimmed text of the longest container element on the
    /// page. A non-success HTTP status is absorbed into an empty string
    /// and is never cached, so a later call for the same pair retries the
    /// fetch. A page with no container elements at all is
    /// [`Error::NoContent`]; transport failures propagate as
    /// [`Error::TransportFailed`].
    pub async fn fetch(&self, artist: &str, song: &str) -> Result<String, Error> {
        if let Some(cache) = &self.cache
            && let Some(hit) = cache.get(&cache_key(artist, song))
        {
            tracing::trace!(artist, song, "cache hit");
            return Ok(hit);
        }

        let url = lyrics_url(&self.base_url, artist, song).map_err(|e| Error::InvalidUrl(e.to_string()))?;

        let response = self.transport.get(&url).await?;

        if !response.status.is_success() {
            tracing::debug!(artist, song, status = %response.status, "no lyrics page, returning empty result");
            return Ok(String::new());
        }

        let lyrics = extract_longest_block(&response.body)?;

        if let Some(cache) = &self.cache {
            cache.insert(&cache_key(artist, song), &lyrics);
        }

        Ok(lyrics)
    }

    /// Same routine as [`fetch`](Self::fetch), behind a heap-allocated
    /// future.
    pub fn fetch_boxed<'a>(&'a self, artist: &'a str, song: &'a str) -> BoxFuture<'a, Result<String, Error>> {
        self.fetch(artist, song).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchResponse;
    use async_trait::async_trait;
    use reqwest::{StatusCode, Url};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedTransport {
        status: StatusCode,
        body: &'static str,
        calls: AtomicUsize,
    }

    impl FixedTransport {
        fn ok(body: &'static str) -> Self {
            Self { status: StatusCode::OK, body, calls: AtomicUsize::new(0) }
        }

        fn not_found() -> Self {
            Self { status: StatusCode::NOT_FOUND, body: "", calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for FixedTransport {
        async fn get(&self, _url: &Url) -> Result<FetchResponse, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(FetchResponse { status: self.status, body: self.body.to_string(), fetch_ms: 0 })
        }
    }

    const PAGE: &str = "<html><body><div>nav</div><div>loving him was red, loving him was red</div></body></html>";

    #[tokio::test]
    async fn test_fetch_extracts_longest_block() {
        let fetcher = LyricsFetcher::new(FixedTransport::ok(PAGE), "https://lyrics.test");
        let lyrics = fetcher.fetch("taylorswift", "red").await.unwrap();
        assert_eq!(lyrics, "loving him was red, loving him was red");
    }

    #[tokio::test]
    async fn test_cached_fetch_skips_transport_on_second_call() {
        let fetcher = LyricsFetcher::with_cache(FixedTransport::ok(PAGE), "https://lyrics.test");

        let first = fetcher.fetch("taylorswift", "red").await.unwrap();
        let second = fetcher.fetch("taylorswift", "red").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(fetcher.transport.calls(), 1);
        assert_eq!(fetcher.cached_entries(), 1);
    }

    #[tokio::test]
    async fn test_uncached_fetch_always_hits_transport() {
        let fetcher = LyricsFetcher::new(FixedTransport::ok(PAGE), "https://lyrics.test");

        fetcher.fetch("taylorswift", "red").await.unwrap();
        fetcher.fetch("taylorswift", "red").await.unwrap();

        assert_eq!(fetcher.transport.calls(), 2);
        assert_eq!(fetcher.cached_entries(), 0);
    }

    #[tokio::test]
    async fn test_not_found_is_empty_and_never_cached() {
        let fetcher = LyricsFetcher::with_cache(FixedTransport::not_found(), "https://lyrics.test");

        assert_eq!(fetcher.fetch("undefined", "null").await.unwrap(), "");
        assert_eq!(fetcher.cached_entries(), 0);

        // Not cached, so the next call retries the network.
        assert_eq!(fetcher.fetch("undefined", "null").await.unwrap(), "");
        assert_eq!(fetcher.transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_no_container_elements_is_explicit_error() {
        let fetcher =
            LyricsFetcher::with_cache(FixedTransport::ok("<html><body><p>oops</p></body></html>"), "https://lyrics.test");

        let result = fetcher.fetch("taylorswift", "red").await;
        assert!(matches!(result, Err(Error::NoContent(_))));
        assert_eq!(fetcher.cached_entries(), 0);
    }

    #[tokio::test]
    async fn test_boxed_shape_matches_inline_shape() {
        let fetcher = LyricsFetcher::new(FixedTransport::ok(PAGE), "https://lyrics.test");

        let inline = fetcher.fetch("taylorswift", "red").await.unwrap();
        let boxed = fetcher.fetch_boxed("taylorswift", "red").await.unwrap();

        assert_eq!(inline, boxed);
    }
}
