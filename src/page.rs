use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::result::{PageResult, PagerError};

/// Page number used when the caller does not specify one.
pub const DEFAULT_PAGE: usize = 1;
/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A validated pagination request: a 1-based page number and a page size,
/// both positive.
///
/// Construction through [`PageRequest::new`] is the single validation
/// boundary; once a request exists, pagination cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Create a request, rejecting a zero `page` or `page_size` with
    /// [`PagerError::InvalidArgument`].
    pub fn new(page: usize, page_size: usize) -> PageResult<Self> {
        if page == 0 {
            return Err(PagerError::InvalidArgument {
                name: "page",
                value: page,
            });
        }

        if page_size == 0 {
            return Err(PagerError::InvalidArgument {
                name: "page_size",
                value: page_size,
            });
        }

        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Translate this request into a half-open `[start, end)` offset pair.
    ///
    /// Pure arithmetic: `start = (page - 1) * page_size`,
    /// `end = start + page_size`. No bounds checking against any dataset
    /// happens here. The arithmetic saturates at `usize::MAX`, so a huge
    /// page number yields a range past the end of any dataset.
    pub fn index_range(&self) -> IndexRange {
        let start = (self.page - 1).saturating_mul(self.page_size);

        IndexRange {
            start,
            end: start.saturating_add(self.page_size),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Half-open `[start, end)` offset pair into a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    /// Clamp the right edge to `len`. Rust range indexing panics past the
    /// end rather than clipping, so the clamp is explicit.
    pub(crate) fn clip(self, len: usize) -> Range<usize> {
        self.start..self.end.min(len)
    }
}

/// One page of a dataset together with its paging metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub records: &'a [T],
    pub info: PageInfo,
}

/// Position of a page within the full dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// 1-based page number that was requested.
    pub page: usize,
    /// Requested page size. The page itself may hold fewer records.
    pub page_size: usize,
    /// Number of pages needed to cover the dataset. Zero for an empty
    /// dataset.
    pub total_pages: usize,
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
}

impl PageInfo {
    pub(crate) fn new(request: &PageRequest, dataset_len: usize) -> Self {
        let total_pages = dataset_len.saturating_add(request.page_size - 1) / request.page_size;

        Self {
            page: request.page,
            page_size: request.page_size,
            total_pages,
            next_page: (request.page < total_pages).then(|| request.page + 1),
            prev_page: (request.page > 1).then(|| request.page - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_range_is_pure_arithmetic() {
        for (page, page_size) in [(1, 10), (2, 10), (3, 7), (100, 1), (1, 1)] {
            let range = PageRequest::new(page, page_size).unwrap().index_range();

            assert_eq!(range.start, (page - 1) * page_size);
            assert_eq!(range.end, (page - 1) * page_size + page_size);
        }
    }

    #[test]
    fn index_range_saturates_instead_of_overflowing() {
        let range = PageRequest::new(usize::MAX, 2).unwrap().index_range();

        assert_eq!(range.start, usize::MAX);
        assert_eq!(range.end, usize::MAX);
    }

    #[test]
    fn zero_page_is_rejected() {
        let err = PageRequest::new(0, 10).unwrap_err();

        assert!(matches!(
            err,
            PagerError::InvalidArgument { name: "page", value: 0 }
        ));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = PageRequest::new(1, 0).unwrap_err();

        assert!(matches!(
            err,
            PagerError::InvalidArgument {
                name: "page_size",
                value: 0
            }
        ));
    }

    #[test]
    fn default_request_is_first_page_of_ten() {
        let request = PageRequest::default();

        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 10);
    }

    #[test]
    fn clip_clamps_only_the_right_edge() {
        let range = IndexRange { start: 10, end: 20 };

        assert_eq!(range.clip(19), 10..19);
        assert_eq!(range.clip(25), 10..20);
    }

    #[test]
    fn page_info_tracks_neighbours() {
        let request = PageRequest::new(2, 10).unwrap();
        let info = PageInfo::new(&request, 19);

        assert_eq!(info.total_pages, 2);
        assert_eq!(info.next_page, None);
        assert_eq!(info.prev_page, Some(1));
    }

    #[test]
    fn page_info_on_empty_dataset() {
        let request = PageRequest::new(1, 10).unwrap();
        let info = PageInfo::new(&request, 0);

        assert_eq!(info.total_pages, 0);
        assert_eq!(info.next_page, None);
        assert_eq!(info.prev_page, None);
    }
}
