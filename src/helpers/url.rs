//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a route path (existing `%` escapes are kept)
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// External URLs are returned unchanged; the path part of internal routes
/// is percent-encoded, the query and fragment are left alone.
///
/// # Examples
/// ```ignore
/// url_for("/site/", "/work/acme") // -> "/site/work/acme"
/// ```
pub fn url_for(root: &str, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }

    let root = root.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let split = path.find(['?', '#']).unwrap_or(path.len());
    let (route, suffix) = path.split_at(split);
    let route = utf8_percent_encode(route, PATH).to_string();

    if route.is_empty() && suffix.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}{}", root, route, suffix)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blog/") // -> "https://example.com/blog/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(&config.root, path))
}

fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}
