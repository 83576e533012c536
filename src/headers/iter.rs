use super::{Header, HeaderMap};

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = <Iter<'a> as Iterator>::Item;

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over header fields as name and value pair.
#[derive(Debug)]
pub struct Iter<'a> {
    iter: std::slice::Iter<'a, Header>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(fields: &'a [Header]) -> Self {
        Self { iter: fields.iter() }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|e| (e.name.as_str(), e.value.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Iterator over all values of a header name.
#[derive(Debug)]
pub struct GetAll<'a> {
    iter: std::slice::Iter<'a, Header>,
    name: &'a str,
}

impl<'a> GetAll<'a> {
    pub(crate) fn new(fields: &'a [Header], name: &'a str) -> Self {
        Self {
            iter: fields.iter(),
            name,
        }
    }
}

impl<'a> Iterator for GetAll<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.name;
        self.iter
            .by_ref()
            .find(|e| e.is(name))
            .map(|e| e.value.as_str())
    }
}
