/// Registrable-domain extraction for Smart Tab Groups
use url::Url;

/// Extract the registrable domain from a URL
///
/// Algorithm:
/// 1. Parse the URL and take its hostname
/// 2. Split the hostname by "."
/// 3. More than 2 labels → keep the last 2 (e.g. "a.b.example.com" → "example.com")
/// 4. Otherwise return the hostname unchanged
///
/// Returns `None` when the URL does not parse or carries no host; callers
/// treat such tabs as ungroupable by domain.
///
/// Examples:
/// - https://www.google.com/search → google.com
/// - https://docs.rs/url → docs.rs
/// - not-a-url → None
pub fn registrable_domain(url: &str) -> Option<String> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::warn!("cannot parse tab URL {url:?}: {err}");
            return None;
        }
    };

    let hostname = parsed.host_str()?;
    let labels: Vec<&str> = hostname.split('.').collect();

    if labels.len() > 2 {
        Some(labels[labels.len() - 2..].join("."))
    } else {
        Some(hostname.to_string())
    }
}
