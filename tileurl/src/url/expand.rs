//! Bracketed-range template expansion.
//!
//! Expands a template carrying one bracketed range marker into concrete
//! endpoint templates:
//!
//! - `https://{a-c}.tile.example/{z}/{x}/{y}.png` - alphabetic range,
//!   one template per letter (a, b, c)
//! - `https://tile{1-4}.example/{z}/{x}/{y}.png` - numeric range,
//!   one template per integer (1 through 4)
//!
//! The alphabetic pattern is tried first, then the numeric one, and only
//! the first match found expands. Templates without a marker come back
//! unchanged as a single element. Expansion is independent of tile
//! concerns and usable for any bracketed-range templating.

use std::sync::OnceLock;

use regex::Regex;

/// Alphabetic range marker: a single lowercase letter on each side.
fn alpha_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([a-z])-([a-z])\}").unwrap())
}

/// Numeric range marker: decimal integers on each side.
fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{(\d+)-(\d+)\}").unwrap())
}

/// Expands a bracketed range marker in a URL template.
///
/// Returns one template per value in the range, substituting the first
/// occurrence of the matched marker text in each. A template without a
/// recognized marker is returned unchanged as the only element; a matched
/// range whose start exceeds its stop yields no templates at all.
///
/// # Examples
///
/// ```
/// use tileurl::url::expand_url;
///
/// let urls = expand_url("https://{a-c}.tile.example/{z}/{x}/{y}.png");
/// assert_eq!(
///     urls,
///     vec![
///         "https://a.tile.example/{z}/{x}/{y}.png",
///         "https://b.tile.example/{z}/{x}/{y}.png",
///         "https://c.tile.example/{z}/{x}/{y}.png",
///     ]
/// );
///
/// let urls = expand_url("https://tile.example/{z}/{x}/{y}.png");
/// assert_eq!(urls, vec!["https://tile.example/{z}/{x}/{y}.png"]);
/// ```
pub fn expand_url(url: &str) -> Vec<String> {
    if let Some(captures) = alpha_pattern().captures(url) {
        let marker = captures.get(0).unwrap().as_str();
        let start = captures.get(1).unwrap().as_str().bytes().next().unwrap();
        let stop = captures.get(2).unwrap().as_str().bytes().next().unwrap();

        let urls: Vec<String> = (start..=stop)
            .map(|letter| url.replacen(marker, &(letter as char).to_string(), 1))
            .collect();
        tracing::debug!(template = url, endpoints = urls.len(), "expanded alphabetic range");
        return urls;
    }

    if let Some(captures) = numeric_pattern().captures(url) {
        let marker = captures.get(0).unwrap().as_str();
        let start = captures.get(1).unwrap().as_str().parse::<u64>();
        let stop = captures.get(2).unwrap().as_str().parse::<u64>();

        // Bounds too large for u64 degrade to the unexpanded template
        if let (Ok(start), Ok(stop)) = (start, stop) {
            let urls: Vec<String> = (start..=stop)
                .map(|number| url.replacen(marker, &number.to_string(), 1))
                .collect();
            tracing::debug!(template = url, endpoints = urls.len(), "expanded numeric range");
            return urls;
        }
    }

    vec![url.to_string()]
}
