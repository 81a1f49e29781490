//! Inverted index over xkcd transcripts: tokenizing, incremental building and AND search.

pub mod builder;
pub mod cursor;
pub mod error;
pub mod index;
pub mod persist;
pub mod search;
pub mod source;
pub mod tokenizer;

pub use builder::{BuildReport, IndexBuilder};
pub use cursor::{Cursor, MissingIds};
pub use error::{IndexError, Result};
pub use index::{DocId, InvertedIndex};
pub use persist::{load_state, save_state, IndexPaths, IndexState};
pub use search::{intersect, search};
pub use source::{DocumentSource, MemorySource};
