use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Metadata for one immediate child of a directory, as reported by the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    pub name: OsString,
    pub size: u64,
    pub is_dir: bool,
}

/// One filesystem entry resolved to an absolute path.
///
/// For a directory, `size` is the sum of the sizes reported for its immediate
/// children, not the recursive total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size: u64,
    pub is_dir: bool,
    pub children: Vec<ChildEntry>,
}

impl fmt::Display for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "size: {} bytes -> {}", self.size, self.path.display())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub top_dirs: Vec<Arc<FileRecord>>,
    pub top_files: Vec<Arc<FileRecord>>,
    /// Records received from workers, root excluded
    pub entries_seen: u64,
}
