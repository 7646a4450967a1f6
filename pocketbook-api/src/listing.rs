//! PagedList: async driver between a `PageLoader` and a remote collection.
//!
//! The loader decides what to fetch and how outcomes mutate the list; this
//! driver owns the awaiting. Stale outcomes (generation mismatch after a
//! refresh or filter change) are dropped here, uniformly, with a debug log.
//! They are never applied and never an error.

use pocketbook_core::{Page, PageCursor, PageLoader, PageRequest, Phase, Resolution};
use tracing::debug;

use crate::error::ApiError;

/// A remote collection that can be fetched one page at a time.
/// Futures stay on the caller's task, so no Send bound is promised.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    type Item;
    type Filter: Clone;

    async fn fetch_page(
        &self,
        page: u32,
        filter: &Self::Filter,
    ) -> Result<Page<Self::Item>, ApiError>;
}

pub struct PagedList<S: PageSource> {
    source: S,
    loader: PageLoader<S::Item, S::Filter>,
}

impl<S: PageSource> PagedList<S> {
    pub fn new(source: S, filter: S::Filter) -> Self {
        Self {
            source,
            loader: PageLoader::new(filter),
        }
    }

    pub fn items(&self) -> &[S::Item] {
        self.loader.items()
    }

    pub fn cursor(&self) -> Option<PageCursor> {
        self.loader.cursor()
    }

    pub fn phase(&self) -> Phase {
        self.loader.phase()
    }

    pub fn filter(&self) -> &S::Filter {
        self.loader.filter()
    }

    /// First-page fetch; false when the list was already populated
    pub async fn mount(&mut self) -> Result<bool, ApiError> {
        match self.loader.start() {
            Some(request) => self.run(request).await.map(|_| true),
            None => Ok(false),
        }
    }

    /// Re-fetch page 1 under the current filter
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let request = self.loader.refresh();
        self.run(request).await
    }

    /// Restart from page 1 under a new filter
    pub async fn apply_filter(&mut self, filter: S::Filter) -> Result<(), ApiError> {
        let request = self.loader.apply_filter(filter);
        self.run(request).await
    }

    /// Fetch the next page; false when there is nothing to do (no cursor
    /// yet, last page reached, or a load already in flight)
    pub async fn load_more(&mut self) -> Result<bool, ApiError> {
        match self.loader.load_more() {
            Some(request) => self.run(request).await.map(|_| true),
            None => Ok(false),
        }
    }

    async fn run(&mut self, request: PageRequest<S::Filter>) -> Result<(), ApiError> {
        match self.source.fetch_page(request.page, &request.filter).await {
            Ok(page) => {
                if self.loader.resolve_loaded(&request, page) == Resolution::Stale {
                    debug!(page = request.page, "dropping stale page response");
                }
                Ok(())
            }
            Err(err) => {
                if self.loader.resolve_failed(&request) == Resolution::Stale {
                    debug!(page = request.page, "dropping stale page failure");
                    return Ok(());
                }
                Err(err)
            }
        }
    }
}
