use crate::error::ScanError;
use crate::types::{ChildEntry, FileRecord};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Build a `FileRecord` for `path` without following symlinks.
///
/// Directories are listed one level deep; their size is the sum of the sizes
/// reported for each immediate child.
pub fn build(path: &Path) -> Result<FileRecord, ScanError> {
    let abs_path = std::path::absolute(path)
        .map(|p| clean(&p))
        .map_err(|e| ScanError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    let metadata = fs::symlink_metadata(&abs_path).map_err(|e| ScanError::from_io(&abs_path, e))?;

    if !metadata.is_dir() {
        return Ok(FileRecord {
            path: abs_path,
            size: metadata.len(),
            is_dir: false,
            children: Vec::new(),
        });
    }

    let children = list_children(&abs_path)?;
    let size = children.iter().map(|c| c.size).sum();

    Ok(FileRecord {
        path: abs_path,
        size,
        is_dir: true,
        children,
    })
}

/// Lexically normalize an absolute path: drop `.` and let `..` pop its parent.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

fn list_children(dir: &Path) -> Result<Vec<ChildEntry>, ScanError> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            let entry = entry.map_err(|e| ScanError::from_walkdir(dir, e))?;
            let metadata = entry
                .metadata()
                .map_err(|e| ScanError::from_walkdir(entry.path(), e))?;
            Ok(ChildEntry {
                name: entry.file_name().to_os_string(),
                size: metadata.len(),
                is_dir: metadata.is_dir(),
            })
        })
        .collect()
}
