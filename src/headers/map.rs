use super::{GetAll, Iter};

/// A single header field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[inline]
    pub(crate) fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// HTTP Headers Multimap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderMap {
    fields: Vec<Header>,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Create new empty [`HeaderMap`] with space for at least `capacity` fields.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Create [`HeaderMap`] from name and values pairs, preserving the given order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Returns the number of header fields, including repeated names.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Append a header field. Existing fields with the same name are kept.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.push(Header::new(name, value));
        self
    }

    /// Returns `true` if the map contains a field with given name.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|e| e.is(name))
    }

    /// Returns the first value corresponding to the given name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|e| e.is(name))
            .map(|e| e.value.as_str())
    }

    /// Returns the first value corresponding to the given name, or `default` if there is none.
    #[inline]
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Returns an iterator to all values corresponding to the given name, in insertion order.
    #[inline]
    pub fn get_all<'a>(&'a self, name: &'a str) -> GetAll<'a> {
        GetAll::new(&self.fields, name)
    }

    /// Returns the unique names, in order of first appearance.
    ///
    /// Names differing only in case are reported once, with the casing seen first.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for field in &self.fields {
            if !keys.iter().any(|e| e.eq_ignore_ascii_case(&field.name)) {
                keys.push(&field.name);
            }
        }
        keys
    }

    /// Returns an iterator over headers as name and value pair.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.fields)
    }

    /// Returns the underlying fields.
    #[inline]
    pub fn as_slice(&self) -> &[Header] {
        &self.fields
    }

    /// Remove all fields, allocated capacity is retained.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = HeaderMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for HeaderMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.add(name, value);
        }
    }
}
