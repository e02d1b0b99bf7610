use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::DomainError;

/// Ordered list of filesystem operations that materialize a data pack.
///
/// This is the output of planning and the input of writing. Entries are
/// relative to `root` and must be applied in order: every directory entry
/// precedes the files written into it.
#[derive(Debug, Clone, Serialize)]
pub struct FileTree {
    pub(crate) root: PathBuf,
    pub(crate) create_root: bool,
    pub(crate) entries: Vec<FsEntry>,
}

impl FileTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            create_root: false,
            entries: Vec::new(),
        }
    }

    /// Create `root` itself before any entry (the "new folder" placement).
    pub fn with_root_creation(mut self, create_root: bool) -> Self {
        self.create_root = create_root;
        self
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            contents,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: String) -> Self {
        self.add_file(path, contents);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyTree);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn creates_root(&self) -> bool {
        self.create_root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileToWrite {
    pub path: PathBuf,
    #[serde(skip)]
    pub contents: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn size(&self) -> usize {
        self.contents.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

/// The directory a data pack was written into.
///
/// Returned by a successful generation so a caller can offer a follow-up
/// action such as opening the folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CreatedRoot(PathBuf);

impl CreatedRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for CreatedRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for CreatedRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
