use std::path::Path;

pub mod loader;
pub use loader::CsvLoader;

pub mod page;
pub use page::{IndexRange, Page, PageInfo, PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

pub mod paginator;
pub use paginator::Paginator;

pub mod record;
pub use record::Record;

pub mod result;
pub use result::{PageResult, PagerError};

/// A tiny CSV dataset paginator.
///
/// Binds a [`CsvLoader`] to a [`Paginator`]: the file is parsed once on
/// first use and every page is a bounded, ordered subset of its rows.
pub struct TinyPager {
    loader: CsvLoader,
}

impl TinyPager {
    /// Create a pager for a CSV file. The file is not read until the
    /// first page is requested.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tinypager::TinyPager;
    ///
    /// let pager = TinyPager::open("Popular_Baby_Names.csv");
    /// let rows = pager.get_page(1, 10).unwrap();
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            loader: CsvLoader::new(path),
        }
    }

    /// Return a [`Paginator`] sharing the loaded dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the file could not be read or parsed.
    pub fn paginator(&self) -> PageResult<Paginator<Record>> {
        Ok(Paginator::from_shared(self.loader.load()?))
    }

    /// Return the rows for a 1-based page.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page number; must be positive.
    /// * `page_size` - Maximum rows per page; must be positive.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero `page` or `page_size`, or if the file
    /// could not be read or parsed. A page past the end of the data is an
    /// empty result, not an error.
    pub fn get_page(&self, page: usize, page_size: usize) -> PageResult<Vec<Record>> {
        let request = PageRequest::new(page, page_size)?;
        let paginator = self.paginator()?;

        Ok(paginator.page(&request).records.to_vec())
    }
}
