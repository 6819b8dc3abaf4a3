use url::Url;

/// Whether a page URL points at a local file rather than a live site.
/// Unparseable URLs are treated as non-local.
pub fn is_local_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.scheme() == "file",
        Err(_) => false,
    }
}
