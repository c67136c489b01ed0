//! Ordered list of files queued for conversion.

use std::path::PathBuf;

use super::source::PathSource;

/// The files queued for conversion.
///
/// Order is insertion order and duplicates are allowed; queueing the
/// same file twice converts it twice.
#[derive(Debug, Default, Clone)]
pub struct FileList {
    files: Vec<PathBuf>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append paths exactly as given, without filtering.
    pub fn push_files(&mut self, paths: Vec<PathBuf>) {
        self.files.extend(paths);
    }

    /// Append everything a source yields.
    pub fn extend_from(&mut self, source: &impl PathSource) {
        self.push_files(source.collect_paths());
    }

    /// Remove the entries at the given indices, keeping the rest in order.
    ///
    /// Indices outside the list are ignored. Removal runs from the
    /// highest index down so earlier removals cannot shift later ones.
    pub fn remove_selected(&mut self, indices: &[usize]) {
        let mut sorted: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.files.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();
        for i in sorted.into_iter().rev() {
            self.files.remove(i);
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Snapshot of the current contents.
    pub fn to_vec(&self) -> Vec<PathBuf> {
        self.files.clone()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
