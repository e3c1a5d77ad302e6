//! Domain tokenization for the textual model input.

use crate::analysis::normalizer::normalize_url;
use crate::analysis::parser::split_uri;

/// Converts the host of `url` into a whitespace-delimited token string.
///
/// The URL is normalized and split generically (IP literals are not
/// bracketed here), the network location is lower-cased, and every `.` and
/// `-` becomes a single space. A URL that cannot be split yields `""`.
///
/// ```
/// use phishing_detector::analysis::tokenize;
///
/// assert_eq!(tokenize("http://sub.example.com"), "sub example com");
/// assert_eq!(tokenize("b-site.org"), "b site org");
/// ```
pub fn tokenize(url: &str) -> String {
    let url = normalize_url(url);
    let host = split_uri(&url)
        .map(|parts| parts.netloc.to_lowercase())
        .unwrap_or_default();

    host.chars()
        .map(|c| if matches!(c, '.' | '-') { ' ' } else { c })
        .collect()
}

/// Tokenizes every URL in `urls`, one token string per input.
pub fn tokenize_batch<I>(urls: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    urls.into_iter().map(|url| tokenize(url.as_ref())).collect()
}
