use crate::{DocId, InvertedIndex};
use std::collections::HashSet;

/// Intersect two posting lists. The longer list (the first on a tie) is hashed and the other
/// is probed in its own order, so the result follows the order of the probed list.
pub fn intersect(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let (build, probe) = if b.len() > a.len() { (b, a) } else { (a, b) };
    let members: HashSet<DocId> = build.iter().copied().collect();
    probe.iter().copied().filter(|id| members.contains(id)).collect()
}

/// Documents containing every keyword of `query`. Keywords are split on single spaces;
/// any keyword missing from the index yields no results.
pub fn search(index: &InvertedIndex, query: &str) -> Vec<DocId> {
    let lists: Option<Vec<&[DocId]>> = query.split(' ').map(|kw| index.lookup(kw)).collect();
    let Some(lists) = lists else {
        tracing::debug!(query, "keyword not in index");
        return Vec::new();
    };

    let mut lists = lists.into_iter();
    let mut result = lists.next().map(<[DocId]>::to_vec).unwrap_or_default();
    for list in lists {
        if result.is_empty() {
            break;
        }
        result = intersect(&result, list);
    }
    result
}
