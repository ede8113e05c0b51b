//! Flat-file session persistence: one `<session_id>.json` per session.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use uuid::Uuid;

use crate::session::bundle::{parse_uploaded_session, BundleError, ExportBundle};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no saved session at {0}")]
    NotFound(PathBuf),

    #[error("session file io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Bundle(#[from] BundleError),
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError {
    let path = path.to_path_buf();
    move |source| StorageError::Io { path, source }
}

pub fn session_path(dir: &Path, id: Uuid) -> PathBuf {
    dir.join(format!("{id}.json"))
}

/// Writes through a temp file in the same directory, then renames over the
/// target so readers never see a partial file.
pub fn save_session(dir: &Path, id: Uuid, bundle: &ExportBundle) -> Result<PathBuf, StorageError> {
    fs::create_dir_all(dir).map_err(io_err(dir))?;
    let path = session_path(dir, id);
    let json = bundle.to_json()?;

    let mut temp_file = NamedTempFile::new_in(dir).map_err(io_err(dir))?;
    temp_file.write_all(json.as_bytes()).map_err(io_err(&path))?;
    temp_file.flush().map_err(io_err(&path))?;
    temp_file
        .persist(&path)
        .map_err(|e| io_err(&path)(e.error))?;

    tracing::info!(path = %path.display(), "session saved");
    Ok(path)
}

pub fn load_session(dir: &Path, id: Uuid) -> Result<ExportBundle, StorageError> {
    let path = session_path(dir, id);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StorageError::NotFound(path))
        }
        Err(source) => return Err(StorageError::Io { path, source }),
    };
    Ok(parse_uploaded_session(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::style::DecodeStyle;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let id = Uuid::new_v4();
        let bundle = ExportBundle {
            input: "We value synergy.".to_string(),
            style: DecodeStyle::RealTalk,
            buzzword_score: 33.33,
            ..ExportBundle::default()
        };

        let path = save_session(dir.path(), id, &bundle).unwrap();
        assert!(path.ends_with(format!("{id}.json")));
        assert_eq!(load_session(dir.path(), id).unwrap(), bundle);
    }

    #[test]
    fn test_save_creates_missing_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let id = Uuid::new_v4();

        save_session(&nested, id, &ExportBundle::default()).unwrap();
        let second = ExportBundle {
            input: "second".to_string(),
            ..ExportBundle::default()
        };
        save_session(&nested, id, &second).unwrap();

        assert_eq!(load_session(&nested, id).unwrap().input, "second");
        assert_eq!(fs::read_dir(&nested).unwrap().count(), 1);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_session(dir.path(), Uuid::new_v4()),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_corrupt_file_is_bundle_error() {
        let dir = tempfile::tempdir().unwrap();
        let id = Uuid::new_v4();
        fs::write(session_path(dir.path(), id), "{broken").unwrap();
        assert!(matches!(
            load_session(dir.path(), id),
            Err(StorageError::Bundle(_))
        ));
    }
}
