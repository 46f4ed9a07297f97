use std::sync::Arc;

use crate::page::{Page, PageInfo, PageRequest};
use crate::result::PageResult;

/// Pagination over an ordered, immutable dataset.
///
/// The paginator holds a shared reference to its dataset and performs a
/// pure computation per call: no state is carried between requests, and
/// clones share the same records, so concurrent readers need no locking.
pub struct Paginator<T> {
    dataset: Arc<Vec<T>>,
}

impl<T> Clone for Paginator<T> {
    fn clone(&self) -> Self {
        Self {
            dataset: self.dataset.clone(),
        }
    }
}

impl<T> Paginator<T> {
    /// Create a paginator owning its dataset.
    pub fn new(dataset: Vec<T>) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Create a paginator over an already-shared dataset, such as one
    /// handed out by [`crate::CsvLoader`].
    pub fn from_shared(dataset: Arc<Vec<T>>) -> Self {
        Self { dataset }
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Return the records for a 1-based page.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page number; must be positive.
    /// * `page_size` - Maximum records per page; must be positive.
    ///
    /// # Returns
    ///
    /// The contiguous slice for that page, in original order. A page past
    /// the end of the dataset yields an empty slice, not an error; the
    /// final partial page yields fewer than `page_size` records. Only a
    /// zero `page` or `page_size` fails.
    pub fn get_page(&self, page: usize, page_size: usize) -> PageResult<&[T]> {
        Ok(self.slice(&PageRequest::new(page, page_size)?))
    }

    /// Return a page with paging metadata for an already-validated
    /// request. This path cannot fail.
    pub fn page(&self, request: &PageRequest) -> Page<'_, T> {
        Page {
            records: self.slice(request),
            info: PageInfo::new(request, self.dataset.len()),
        }
    }

    fn slice(&self, request: &PageRequest) -> &[T] {
        let range = request.index_range();

        // A start offset at or past the end is the defined empty outcome.
        if range.start >= self.dataset.len() {
            return &[];
        }

        &self.dataset[range.clip(self.dataset.len())]
    }
}
