use crate::error::ScanError;
use crate::ranking::insert_sorted;
use crate::record;
use crate::types::{ChildEntry, FileRecord, ScanResult};
use crossbeam_channel::{bounded, select, SendError, Sender};
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Maximum number of entries kept in each result list
    pub limit: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Find the largest files and directories beneath `root`.
pub fn scan(root: &Path, config: &ScanConfig) -> Result<ScanResult, ScanError> {
    scan_with(root, config, record::build)
}

/// Scan using `build` to turn each path into a `FileRecord`.
///
/// One worker thread is started per immediate child of the root; everything
/// below that child is walked sequentially inside the same worker. Workers only
/// send records and a single completion signal. Both result lists are owned
/// and updated by this thread alone.
///
/// Errors building the root are returned. Errors below the root are logged
/// and the affected entry is skipped.
pub fn scan_with<F>(root: &Path, config: &ScanConfig, build: F) -> Result<ScanResult, ScanError>
where
    F: Fn(&Path) -> Result<FileRecord, ScanError> + Sync,
{
    let start = Instant::now();

    let root = Arc::new(build(root)?);
    if !root.is_dir {
        return Err(ScanError::NotADirectory {
            path: root.path.clone(),
        });
    }

    let mut top_dirs = insert_sorted(Vec::new(), Arc::clone(&root), config.limit);
    let mut top_files = Vec::new();
    let mut entries_seen = 0u64;

    // Rendezvous channels: every record a worker sends has been received
    // before its completion signal can be.
    let (record_tx, record_rx) = bounded::<Arc<FileRecord>>(0);
    let (done_tx, done_rx) = bounded::<()>(0);

    let build = &build;
    let launched = root.children.len();

    thread::scope(|s| {
        for child in &root.children {
            let record_tx = record_tx.clone();
            let done_tx = done_tx.clone();
            let base = root.path.as_path();
            debug!(
                "spawning walker for {} {}",
                if child.is_dir { "directory" } else { "file" },
                base.join(&child.name).display()
            );

            s.spawn(move || {
                let _done = DoneSignal(done_tx);
                if walk(child, base, &record_tx, build).is_err() {
                    debug!("record receiver closed, stopping walk");
                }
            });
        }

        let mut finished = 0;
        while finished < launched {
            select! {
                recv(record_rx) -> msg => {
                    if let Ok(record) = msg {
                        entries_seen += 1;
                        if record.is_dir {
                            top_dirs = insert_sorted(std::mem::take(&mut top_dirs), record, config.limit);
                        } else {
                            top_files = insert_sorted(std::mem::take(&mut top_files), record, config.limit);
                        }
                    }
                }
                recv(done_rx) -> _ => finished += 1,
            }
        }
    });

    info!(
        "scanned {} entries under {} with {} workers in {:.2?}",
        entries_seen,
        root.path.display(),
        launched,
        start.elapsed()
    );

    Ok(ScanResult {
        top_dirs,
        top_files,
        entries_seen,
    })
}

/// Sends a worker's completion signal when dropped, including on unwind.
struct DoneSignal(Sender<()>);

impl Drop for DoneSignal {
    fn drop(&mut self) {
        self.0.send(()).ok();
    }
}

/// Emit a record for `base/entry` and, if it is a directory, everything below it.
///
/// A failure to build a record is logged and only that branch is abandoned.
/// Returns an error only when the receiving end of `emit` has gone away.
pub fn walk<F>(
    entry: &ChildEntry,
    base: &Path,
    emit: &Sender<Arc<FileRecord>>,
    build: &F,
) -> Result<(), SendError<Arc<FileRecord>>>
where
    F: Fn(&Path) -> Result<FileRecord, ScanError>,
{
    let path = base.join(&entry.name);
    let record = match build(&path) {
        Ok(r) => Arc::new(r),
        Err(e) => {
            warn!("failed to read {}: {e}, skipping", path.display());
            return Ok(());
        }
    };

    emit.send(Arc::clone(&record))?;

    if record.is_dir {
        for child in &record.children {
            walk(child, &record.path, emit, build)?;
        }
    }
    Ok(())
}
