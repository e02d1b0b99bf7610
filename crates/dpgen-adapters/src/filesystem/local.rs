//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use dpgen_core::{
    application::{ApplicationError, WriteOperation, ports::Filesystem},
    error::{DpgenError, DpgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> DpgenResult<()> {
        std::fs::create_dir_all(path)
            .map_err(|e| map_io_error(path, e, WriteOperation::CreateDirectory))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> DpgenResult<()> {
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, WriteOperation::WriteFile))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: WriteOperation) -> DpgenError {
    ApplicationError::ScaffoldWrite {
        path: path.to_path_buf(),
        operation,
        reason: e.to_string(),
    }
    .into()
}
