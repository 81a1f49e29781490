use crate::DocId;
use std::collections::HashMap;

/// Where documents come from. `Ok(None)` means the ID does not exist, which ends a build pass.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    async fn fetch(&self, doc_id: DocId) -> anyhow::Result<Option<String>>;
}

/// In-memory source, handy for tests and offline rebuilds.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    docs: HashMap<DocId, String>,
}

impl MemorySource {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, doc_id: DocId, transcript: impl Into<String>) -> Self {
        self.docs.insert(doc_id, transcript.into());
        self
    }
}

impl DocumentSource for MemorySource {
    async fn fetch(&self, doc_id: DocId) -> anyhow::Result<Option<String>> {
        Ok(self.docs.get(&doc_id).cloned())
    }
}
