//! Benchmark parameter sweep dataset.
//!
//! The default sweep is seven literal (artist, song) pairs. The
//! `("taylorswift", "red")` pair appears twice on purpose, exercising the
//! cache-hit path inside a single sweep; `("undefined", "null")` is
//! expected to 404 and exercises the empty-result path.

use serde::{Deserialize, Serialize};

use crate::cache::cache_key;

/// One (artist, song) pair in the benchmark sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackQuery {
    pub artist: String,
    pub song: String,
}

impl TrackQuery {
    pub fn new(artist: impl Into<String>, song: impl Into<String>) -> Self {
        Self { artist: artist.into(), song: song.into() }
    }

    /// Lookup key for this pair, `{artist}_{song}`.
    pub fn cache_key(&self) -> String {
        cache_key(&self.artist, &self.song)
    }
}

/// The built-in sweep, in fixed order.
pub fn default_dataset() -> Vec<TrackQuery> {
    [
        ("taylorswift", "red"),
        ("queen", "bohemianrhapsody"),
        ("westlife", "mylove"),
        ("taylorswift", "backtodecember"),
        ("eagles", "hotelcalifornia"),
        ("undefined", "null"),
        ("taylorswift", "red"),
    ]
    .into_iter()
    .map(|(artist, song)| TrackQuery::new(artist, song))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_order_and_size() {
        let dataset = default_dataset();
        assert_eq!(dataset.len(), 7);
        assert_eq!(dataset[0], TrackQuery::new("taylorswift", "red"));
        assert_eq!(dataset[5], TrackQuery::new("undefined", "null"));
    }

    #[test]
    fn test_default_dataset_keeps_duplicate_pair() {
        let dataset = default_dataset();
        assert_eq!(dataset[0], dataset[6]);
    }

    #[test]
    fn test_track_query_cache_key() {
        let query = TrackQuery::new("eagles", "hotelcalifornia");
        assert_eq!(query.cache_key(), "eagles_hotelcalifornia");
    }
}
