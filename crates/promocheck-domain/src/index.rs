use promocheck_types::Code;
use std::collections::HashSet;
use std::collections::hash_set;

/// Set of codes materialized from a source. Read-only once handed to the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeIndex {
    codes: HashSet<Code>,
}

impl CodeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            codes: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` if the code was not already present.
    pub fn insert(&mut self, code: Code) -> bool {
        self.codes.insert(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Code> {
        self.codes.iter()
    }
}

impl FromIterator<Code> for CodeIndex {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Code> for CodeIndex {
    fn extend<I: IntoIterator<Item = Code>>(&mut self, iter: I) {
        self.codes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CodeIndex {
    type Item = &'a Code;
    type IntoIter = hash_set::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

impl IntoIterator for CodeIndex {
    type Item = Code;
    type IntoIter = hash_set::IntoIter<Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.into_iter()
    }
}
