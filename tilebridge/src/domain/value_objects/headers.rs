//! Response headers value object.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Headers accompanying a tile or grid payload.
///
/// Sources commonly report `Content-Type`, `Content-Encoding`, `ETag` or
/// `Last-Modified` here. Names are stored as given; lookups are exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(BTreeMap<String, String>);

impl Headers {
    /// Create an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, returning the previous value for that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder-style [`Headers::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a header value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterate headers in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no headers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_insert_and_get() {
        let mut headers = Headers::new();
        assert!(headers.is_empty());
        assert_eq!(headers.insert("Content-Type", "image/png"), None);
        assert_eq!(
            headers.insert("Content-Type", "image/webp"),
            Some("image/png".into())
        );
        assert_eq!(headers.get("Content-Type"), Some("image/webp"));
        assert_eq!(headers.get("content-type"), None);
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_headers_iterate_in_name_order() {
        let headers: Headers = [("b", "2"), ("a", "1")].into_iter().collect();
        let names: Vec<_> = headers.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
