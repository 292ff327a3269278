//! Owned virtual file set keyed by path.
//!
//! A session owns its file set outright; nothing here is process-wide.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use tsassist_types::FileId;

#[derive(Debug, Clone, Default)]
pub struct VirtualFiles {
    files: BTreeMap<FileId, String>,
}

impl VirtualFiles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a file, returning the previous contents.
    pub fn insert(&mut self, file: FileId, text: impl Into<String>) -> Option<String> {
        self.files.insert(file, text.into())
    }

    #[must_use]
    pub fn get(&self, file: &FileId) -> Option<&str> {
        self.files.get(file).map(String::as_str)
    }

    pub fn remove(&mut self, file: &FileId) -> Option<String> {
        self.files.remove(file)
    }

    #[must_use]
    pub fn contains(&self, file: &FileId) -> bool {
        self.files.contains_key(file)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FileId, &str)> {
        self.files.iter().map(|(id, text)| (id, text.as_str()))
    }

    /// Read every regular file in `dir` (non-recursive) into the set, keyed
    /// as `prefix + file_name`. Returns the number of files loaded.
    ///
    /// Files that are not valid UTF-8 are skipped with a warning.
    pub fn load_dir(&mut self, dir: &Path, prefix: &str) -> io::Result<usize> {
        let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
        entries.sort_by_key(fs::DirEntry::file_name);

        let mut loaded = 0;
        for entry in entries {
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                tracing::warn!(path = %entry.path().display(), "Skipping non-UTF-8 file name");
                continue;
            };
            match fs::read_to_string(entry.path()) {
                Ok(text) => {
                    self.insert(FileId::new(format!("{prefix}{name}")), text);
                    loaded += 1;
                }
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    tracing::warn!(path = %entry.path().display(), "Skipping non-UTF-8 file");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(dir = %dir.display(), loaded, "Loaded virtual files");
        Ok(loaded)
    }
}
