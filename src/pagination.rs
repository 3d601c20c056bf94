//! Pagination links from GitHub `Link` headers.

use serde::{Deserialize, Serialize};
use url::Url;

/// Page numbers advertised by a response's `Link` header.
///
/// GitHub paginates list endpoints by page number. Each field holds the
/// `page` query parameter of the matching `rel` link, or `None` if the link
/// was absent or had no parseable page number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    /// Next page number.
    pub next: Option<u32>,
    /// Previous page number.
    pub prev: Option<u32>,
    /// First page number.
    pub first: Option<u32>,
    /// Last page number.
    pub last: Option<u32>,
}

impl PageLinks {
    /// Parse a `Link` header value.
    ///
    /// Malformed entries are skipped rather than treated as errors.
    #[must_use]
    pub fn parse(header: &str) -> Self {
        let mut links = Self::default();

        for entry in header.split(',') {
            let mut parts = entry.split(';').map(str::trim);

            let Some(target) = parts
                .next()
                .and_then(|t| t.strip_prefix('<'))
                .and_then(|t| t.strip_suffix('>'))
            else {
                continue;
            };

            let Some(page) = page_number(target) else {
                continue;
            };

            for param in parts {
                let Some(rel) = param.strip_prefix("rel=") else {
                    continue;
                };
                match rel.trim_matches('"') {
                    "next" => links.next = Some(page),
                    "prev" => links.prev = Some(page),
                    "first" => links.first = Some(page),
                    "last" => links.last = Some(page),
                    _ => {}
                }
            }
        }

        links
    }

    /// Returns true if there are more pages after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// Returns true if the header advertised no links at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn page_number(target: &str) -> Option<u32> {
    let url = Url::parse(target).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "page")
        .and_then(|(_, v)| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_next_and_last() {
        let header = r#"<https://api.github.com/repositories/1/issues?page=2>; rel="next", <https://api.github.com/repositories/1/issues?page=5>; rel="last""#;
        let links = PageLinks::parse(header);

        assert_eq!(links.next, Some(2));
        assert_eq!(links.last, Some(5));
        assert_eq!(links.prev, None);
        assert!(links.has_more());
    }

    #[test]
    fn test_parse_all_relations() {
        let header = concat!(
            "<https://api.github.com/x?per_page=10&page=3>; rel=\"next\", ",
            "<https://api.github.com/x?per_page=10&page=1>; rel=\"prev\", ",
            "<https://api.github.com/x?per_page=10&page=1>; rel=\"first\", ",
            "<https://api.github.com/x?per_page=10&page=9>; rel=\"last\""
        );
        let links = PageLinks::parse(header);

        assert_eq!(
            links,
            PageLinks {
                next: Some(3),
                prev: Some(1),
                first: Some(1),
                last: Some(9),
            }
        );
    }

    #[test]
    fn test_parse_malformed_is_empty() {
        assert!(PageLinks::parse("").is_empty());
        assert!(PageLinks::parse("garbage").is_empty());
        assert!(PageLinks::parse("<not a url>; rel=\"next\"").is_empty());
        assert!(PageLinks::parse("<https://api.github.com/x?page=abc>; rel=\"next\"").is_empty());
    }
}
