use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
}

impl ScanError {
    /// Classify an I/O failure on `path` by its error kind.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound { path },
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied { path },
            _ => ScanError::Io { path, source: err },
        }
    }

    pub fn from_walkdir(path: &Path, err: walkdir::Error) -> Self {
        let path = err.path().map_or_else(|| path.to_path_buf(), Path::to_path_buf);
        match err.into_io_error() {
            Some(io_err) => ScanError::from_io(&path, io_err),
            // Loop errors only occur when following links, which we never do.
            None => ScanError::Io {
                path,
                source: io::Error::other("directory listing failed"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_kinds() {
        let p = Path::new("/some/where");
        assert!(matches!(
            ScanError::from_io(p, io::Error::from(io::ErrorKind::NotFound)),
            ScanError::NotFound { .. }
        ));
        assert!(matches!(
            ScanError::from_io(p, io::Error::from(io::ErrorKind::PermissionDenied)),
            ScanError::PermissionDenied { .. }
        ));
        assert!(matches!(
            ScanError::from_io(p, io::Error::other("boom")),
            ScanError::Io { .. }
        ));
    }

    #[test]
    fn test_from_walkdir_keeps_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = walkdir::WalkDir::new(&missing)
            .into_iter()
            .next()
            .unwrap()
            .unwrap_err();

        match ScanError::from_walkdir(dir.path(), err) {
            ScanError::NotFound { path } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = ScanError::NotADirectory {
            path: PathBuf::from("/tmp/file.txt"),
        };
        assert_eq!(err.to_string(), "/tmp/file.txt is not a directory");

        let err = ScanError::PermissionDenied {
            path: PathBuf::from("/root/secret"),
        };
        assert_eq!(err.to_string(), "permission denied: /root/secret");
    }
}
