use std::{fmt, slice};

/// The parameter values extracted by a route match.
///
/// Parameter names borrow from the router's route table; values are copied
/// out of the request path. Pairs are kept in capture order (left to right
/// in the template) and are not deduplicated: when a template registers the
/// same name twice, iteration yields both pairs and [`get`](Params::get)
/// returns the last occurrence.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut router = routeset::Router::new();
/// # router.add("/users/{id}", true)?;
/// let matched = router.destinations("/users/1");
///
/// // get a specific value by name
/// assert_eq!(matched[0].params.get("id"), Some("1"));
///
/// // or iterate through the pairs
/// for (name, value) in matched[0].params.iter() {
///     println!("{name} = {value}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Params<'router> {
    pairs: Vec<(&'router str, String)>,
}

impl<'router> Params<'router> {
    pub(crate) fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub(crate) fn push(&mut self, name: &'router str, value: String) {
        self.pairs.push((name, value));
    }

    /// Returns the value captured under the given parameter name.
    ///
    /// When a template binds the same name more than once, the last
    /// occurrence wins.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        let name = name.as_ref();
        self.pairs
            .iter()
            .rev()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns an iterator over the name/value pairs, in capture order.
    pub fn iter(&self) -> ParamsIter<'_, 'router> {
        ParamsIter {
            inner: self.pairs.iter(),
        }
    }

    /// Returns the number of captured parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the match captured no parameters.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Debug for Params<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pairs.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

/// An iterator over the name/value pairs of a match's [`Params`].
pub struct ParamsIter<'ps, 'router> {
    inner: slice::Iter<'ps, (&'router str, String)>,
}

impl<'ps, 'router> Iterator for ParamsIter<'ps, 'router> {
    type Item = (&'router str, &'ps str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (*name, value.as_str()))
    }
}

impl ExactSizeIterator for ParamsIter<'_, '_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_order() {
        let mut params = Params::new();
        params.push("a", "1".to_owned());
        params.push("b", "2".to_owned());
        params.push("c", "3".to_owned());

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2"), ("c", "3")]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn duplicate_name_last_wins() {
        let mut params = Params::new();
        params.push("id", "first".to_owned());
        params.push("id", "second".to_owned());

        assert_eq!(params.get("id"), Some("second"));
        // both pairs remain visible through iteration
        assert_eq!(params.iter().count(), 2);
    }

    #[test]
    fn missing_name() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.get("nope"), None);
    }
}
