use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::record::Record;
use crate::result::PageResult;

/// Loads a CSV dataset from disk exactly once.
///
/// The first call to [`CsvLoader::load`] opens the file, discards the
/// header row, parses the remaining rows and caches them; every call
/// after that returns the cached dataset. The loader is constructed by
/// the caller and handed to whoever needs the data, so there is no
/// process-wide state, and the published dataset is immutable and safe
/// to read from any number of threads.
pub struct CsvLoader {
    path: PathBuf,
    cache: OnceCell<Arc<Vec<Record>>>,
}

impl CsvLoader {
    /// Create a loader for the given file. Nothing is read until the
    /// first [`CsvLoader::load`].
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_owned(),
            cache: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the dataset, reading and parsing the file on the first
    /// call only. Idempotent: concurrent callers race to fill the cache
    /// at most once and all observe the same dataset afterwards.
    pub fn load(&self) -> PageResult<Arc<Vec<Record>>> {
        self.cache.get_or_try_init(|| self.read()).cloned()
    }

    fn read(&self) -> PageResult<Arc<Vec<Record>>> {
        // The reader treats the first row as a header and skips it.
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = Vec::new();

        for row in reader.records() {
            records.push(Record::from(row?));
        }

        Ok(Arc::new(records))
    }
}
