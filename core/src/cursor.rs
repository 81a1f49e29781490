use crate::{DocId, IndexError, Result};
use std::collections::BTreeSet;
use std::fmt;

/// Document IDs that are permanently missing from the corpus and must never be fetched.
pub const KNOWN_MISSING: &[DocId] = &[404];

/// Next document ID the builder has not yet attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(DocId);

impl Cursor {
    pub const START: Cursor = Cursor(1);

    pub fn new(next: DocId) -> Self { Self(next.max(1)) }

    pub fn get(self) -> DocId { self.0 }

    pub fn advance(&mut self) -> Result<()> {
        self.0 = self.0.checked_add(1).ok_or(IndexError::CursorExhausted(self.0))?;
        Ok(())
    }
}

impl Default for Cursor {
    fn default() -> Self { Self::START }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

/// Set of IDs the builder steps over without a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingIds(BTreeSet<DocId>);

impl MissingIds {
    pub fn contains(&self, id: DocId) -> bool { self.0.contains(&id) }
}

impl Default for MissingIds {
    fn default() -> Self { KNOWN_MISSING.iter().copied().collect() }
}

impl FromIterator<DocId> for MissingIds {
    fn from_iter<I: IntoIterator<Item = DocId>>(iter: I) -> Self { Self(iter.into_iter().collect()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        assert_eq!(Cursor::default().get(), 1);
        assert_eq!(Cursor::new(0), Cursor::START);
    }

    #[test]
    fn advance_stops_at_the_last_id() {
        let mut c = Cursor::new(DocId::MAX - 1);
        c.advance().unwrap();
        assert_eq!(c.get(), DocId::MAX);
        assert!(matches!(c.advance(), Err(IndexError::CursorExhausted(id)) if id == DocId::MAX));
        assert_eq!(c.get(), DocId::MAX);
    }

    #[test]
    fn default_missing_set() {
        let missing = MissingIds::default();
        assert!(missing.contains(404));
        assert!(!missing.contains(403));
    }
}
