use crate::rail::core::RopResult;
use crate::types::Error;

/// Iterator over a borrowed success payload (zero or one item).
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Owning iterator over the success payload (zero or one item).
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> IntoIterator for RopResult<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_value() }
    }
}

impl<'a, T> IntoIterator for &'a RopResult<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> RopResult<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.value() }
    }

    pub fn iter_errors(&self) -> core::slice::Iter<'_, Error> {
        self.errors().iter()
    }
}
