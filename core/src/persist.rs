use crate::{Cursor, DocId, IndexError, InvertedIndex, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, create_dir_all, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;

pub const SNAPSHOT_VERSION: u32 = 1;

pub struct IndexPaths {
    pub root: PathBuf,
}

impl IndexPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    pub fn snapshot(&self) -> PathBuf { self.root.join("snapshot.json") }
    fn snapshot_tmp(&self) -> PathBuf { self.root.join("snapshot.json.tmp") }
}

/// Everything a build pass reads and writes: the index and the cursor that goes with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexState {
    pub index: InvertedIndex,
    pub cursor: Cursor,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    version: u32,
    cursor: DocId,
    #[serde(default)]
    updated_at: String,
    index: InvertedIndex,
}

/// Load the persisted snapshot. A missing file is the first-run state: empty index, cursor 1.
pub fn load_state(paths: &IndexPaths) -> Result<IndexState> {
    let path = paths.snapshot();
    let bytes = match fs::read(&path) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "no index snapshot, starting with an empty index");
            return Ok(IndexState::default());
        }
        Err(source) => return Err(IndexError::Load { path, source }),
    };
    let snap: SnapshotFile = serde_json::from_slice(&bytes)
        .map_err(|source| IndexError::Corrupt { path: path.clone(), source })?;
    if snap.version != SNAPSHOT_VERSION {
        return Err(IndexError::UnsupportedVersion { path, version: snap.version });
    }
    tracing::debug!(
        path = %path.display(),
        cursor = snap.cursor,
        words = snap.index.len(),
        updated_at = %snap.updated_at,
        "loaded index snapshot"
    );
    Ok(IndexState { index: snap.index, cursor: Cursor::new(snap.cursor) })
}

/// Persist index and cursor together. The snapshot is written to a temp file and renamed
/// into place, so readers see either the old snapshot or the new one.
pub fn save_state(paths: &IndexPaths, state: &IndexState) -> Result<()> {
    let updated_at = time::OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default();
    let snap = SnapshotFile {
        version: SNAPSHOT_VERSION,
        cursor: state.cursor.get(),
        updated_at,
        index: state.index.clone(),
    };
    let bytes = serde_json::to_vec(&snap)?;

    create_dir_all(&paths.root).map_err(|source| IndexError::Save { path: paths.root.clone(), source })?;
    let tmp = paths.snapshot_tmp();
    write_synced(&tmp, &bytes).map_err(|source| IndexError::Save { path: tmp.clone(), source })?;
    let dest = paths.snapshot();
    fs::rename(&tmp, &dest).map_err(|source| IndexError::Save { path: dest.clone(), source })?;
    sync_dir(&paths.root).map_err(|source| IndexError::Save { path: paths.root.clone(), source })?;

    tracing::info!(path = %dest.display(), cursor = %state.cursor, words = state.index.len(), "index snapshot saved");
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()
}

/// Make the rename durable. Directories cannot be opened for syncing on Windows.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}
