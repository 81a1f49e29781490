use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type DocId = u32;

/// Word to posting-list mapping. Posting lists hold each document ID at most once,
/// in the order documents were indexed, which is ascending for a build pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<DocId>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Exact, case-sensitive lookup. `None` means the word was never indexed.
    pub fn lookup(&self, word: &str) -> Option<&[DocId]> {
        self.postings.get(word).map(Vec::as_slice)
    }

    /// Append `doc_id` to the posting list for `word`. Returns false if it was already there.
    pub fn insert(&mut self, doc_id: DocId, word: &str) -> bool {
        match self.postings.get_mut(word) {
            Some(list) => {
                if list.contains(&doc_id) {
                    return false;
                }
                list.push(doc_id);
            }
            None => {
                self.postings.insert(word.to_string(), vec![doc_id]);
            }
        }
        true
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DocId])> {
        self.postings.iter().map(|(w, ids)| (w.as_str(), ids.as_slice()))
    }
}

impl FromIterator<(String, Vec<DocId>)> for InvertedIndex {
    fn from_iter<I: IntoIterator<Item = (String, Vec<DocId>)>>(iter: I) -> Self {
        Self { postings: iter.into_iter().collect() }
    }
}
