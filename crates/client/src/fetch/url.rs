//! Lyrics page address construction.

/// Error type for lyrics URL construction failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty base URL")]
    EmptyBase,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Build the page address for an (artist, song) pair:
/// `<base>/lyrics/<artist>/<song>.html`.
///
/// Identifiers are interpolated verbatim. No validation or normalization is
/// applied, so empty or pathological identifiers flow through and may yield
/// an address that does not exist; only an address the URL parser rejects
/// outright is an error.
pub fn lyrics_url(base: &str, artist: &str, song: &str) -> Result<url::Url, UrlError> {
    let base = base.trim().trim_end_matches('/');

    if base.is_empty() {
        return Err(UrlError::EmptyBase);
    }

    let parsed = url::Url::parse(&format!("{base}/lyrics/{artist}/{song}.html"))
        .map_err(|e| UrlError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }

    Ok(parsed)
}
