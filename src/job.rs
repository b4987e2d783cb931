// src/job.rs - Transient staging of incoming documents
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A staged print job document.
///
/// The backing file lives in the job directory only for the lifetime of this
/// value: dropping it removes the file, on every exit path. Jobs are not
/// tracked after the file is gone.
#[derive(Debug)]
pub struct JobFile {
    id: Uuid,
    file: NamedTempFile,
}

impl JobFile {
    /// Write `document` to a uniquely named file under `dir`, creating the
    /// directory if needed.
    pub fn stage(dir: &Path, document: &[u8]) -> Result<Self, JobError> {
        std::fs::create_dir_all(dir)?;
        let id = Uuid::new_v4();
        let file = tempfile::Builder::new()
            .prefix(&format!("job-{id}-"))
            .tempfile_in(dir)?;
        Self::fill(id, file, document)
    }

    // A write failure here drops `file`, which removes the partially written
    // temp file.
    fn fill(id: Uuid, mut file: NamedTempFile, document: &[u8]) -> Result<Self, JobError> {
        file.write_all(document)?;
        file.flush()?;
        tracing::info!("Staged print job {} at {}", id, file.path().display());
        Ok(Self { id, file })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_stage_writes_document() {
        let dir = tempdir().unwrap();
        let job = JobFile::stage(dir.path(), b"%PDF-1.4 fake document").unwrap();
        let on_disk = std::fs::read(job.path()).unwrap();
        assert_eq!(on_disk, b"%PDF-1.4 fake document");
    }

    #[test]
    fn test_drop_removes_file() {
        let dir = tempdir().unwrap();
        let job = JobFile::stage(dir.path(), b"bytes").unwrap();
        let path = job.path().to_path_buf();
        assert!(path.exists());
        drop(job);
        assert!(!path.exists());
    }

    #[test]
    fn test_staged_files_never_collide() {
        let dir = tempdir().unwrap();
        let a = JobFile::stage(dir.path(), b"first").unwrap();
        let b = JobFile::stage(dir.path(), b"second").unwrap();
        assert_ne!(a.id(), b.id());
        assert_ne!(a.path(), b.path());
        assert!(a.path().exists());
        assert!(b.path().exists());
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let dir = tempdir().unwrap();
        let file = tempfile::Builder::new()
            .prefix("job-")
            .tempfile_in(dir.path())
            .unwrap();
        // Swap in a read-only handle so the write itself fails after the
        // file already exists on disk
        let (_, temp_path) = file.into_parts();
        let readonly = std::fs::File::open(&temp_path).unwrap();
        let path = temp_path.to_path_buf();
        let file = NamedTempFile::from_parts(readonly, temp_path);

        let result = JobFile::fill(Uuid::new_v4(), file, b"document");
        assert!(matches!(result, Err(JobError::Io(_))));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_stage_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("jobs");
        let job = JobFile::stage(&nested, b"bytes").unwrap();
        assert!(job.path().starts_with(&nested));
    }
}
