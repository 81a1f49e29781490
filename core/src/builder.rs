use crate::cursor::MissingIds;
use crate::tokenizer::{is_well_formed, tokenize};
use crate::{DocId, DocumentSource, IndexError, IndexState, Result};

/// Outcome of one build pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Cursor value the pass started from.
    pub start: DocId,
    /// Cursor value after the pass: the first ID that was not found.
    pub cursor: DocId,
    pub indexed: u32,
    pub skipped_malformed: Vec<DocId>,
    pub skipped_missing: Vec<DocId>,
}

/// Drives fetch, tokenize and index update from the cursor up to the first missing document.
pub struct IndexBuilder<'a, S> {
    source: &'a S,
    missing: MissingIds,
}

impl<'a, S: DocumentSource> IndexBuilder<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source, missing: MissingIds::default() }
    }

    /// Replace the set of IDs that are skipped without a fetch.
    pub fn with_missing(mut self, missing: MissingIds) -> Self {
        self.missing = missing;
        self
    }

    /// Run a build pass over `state`. On error the partially updated state is dropped,
    /// so nothing from the failed pass can be persisted.
    pub async fn run(&self, mut state: IndexState) -> Result<(IndexState, BuildReport)> {
        let mut report = BuildReport { start: state.cursor.get(), ..Default::default() };

        loop {
            let doc_id = state.cursor.get();
            if self.missing.contains(doc_id) {
                tracing::debug!(doc_id, "skipping known missing document");
                report.skipped_missing.push(doc_id);
                state.cursor.advance()?;
                continue;
            }

            let transcript = match self.source.fetch(doc_id).await {
                Ok(Some(t)) => t,
                Ok(None) => {
                    tracing::debug!(doc_id, "document not found, end of corpus");
                    break;
                }
                Err(source) => return Err(IndexError::Fetch { doc_id, source }),
            };

            if !is_well_formed(&transcript) {
                tracing::error!(doc_id, %transcript, "transcript not in bracketed format, skipping");
                report.skipped_malformed.push(doc_id);
                state.cursor.advance()?;
                continue;
            }

            let mut new_words = 0usize;
            for word in tokenize(&transcript) {
                if state.index.insert(doc_id, word) {
                    new_words += 1;
                }
            }
            tracing::debug!(doc_id, words = new_words, "indexed document");
            report.indexed += 1;
            state.cursor.advance()?;
        }

        report.cursor = state.cursor.get();
        Ok((state, report))
    }
}
