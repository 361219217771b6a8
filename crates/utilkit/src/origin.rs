//! Origin header parsing.

use url::{Host, Url};

/// Returns the first label of the host in an `Origin`-style header.
///
/// `"https://sub.example.com"` gives `"sub"`. IP hosts are labelled the same
/// way, so `"http://127.0.0.1:8080"` gives `"127"`. This never fails: an
/// unparseable header, or one without a host, gives an empty string.
///
/// Hosts are normalized by the URL parser first: domains of web schemes are
/// lower-cased and internationalized labels come back in their ASCII
/// (punycode) form, so `"https://bücher.example.com"` gives `"xn--bcher-kva"`.
///
/// # Examples
///
/// ```
/// use utilkit::parse_origin_label;
///
/// assert_eq!(parse_origin_label("https://sub.example.com"), "sub");
/// assert_eq!(parse_origin_label("not a url"), "");
/// ```
pub fn parse_origin_label(origin_header: &str) -> String {
    let url = match Url::parse(origin_header) {
        Ok(url) => url,
        Err(err) => {
            tracing::debug!(origin = origin_header, error = %err, "Unparseable origin header");
            return String::new();
        }
    };

    let host = match url.host() {
        Some(Host::Domain(domain)) => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        None => return String::new(),
    };

    host.split('.').next().unwrap_or_default().to_string()
}
