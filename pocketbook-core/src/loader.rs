//! PageLoader: paginated, filterable list loading as an explicit state machine.
//!
//! Purpose:
//! - One loader behind every "list that loads more as you scroll" surface
//!   (transactions, payment items, goals) instead of per-screen ad hoc state.
//! - Stay free of I/O and of any rendering framework: transitions emit a
//!   `PageRequest` describing the fetch to perform, the caller performs it
//!   and feeds the outcome back through `resolve_*`.
//!
//! Design:
//! - Page 1 replaces the accumulated items; page > 1 appends. Refresh and
//!   filter change are a reset, load-more is a continuation.
//! - A single load may be in flight at a time. Scroll gestures can trip the
//!   near-bottom condition many times per second, so `load_more` is a no-op
//!   unless the loader is idle and the cursor says more pages exist.
//! - Every request carries the generation it was issued under. Refresh and
//!   filter changes bump the generation, so a slow response from before the
//!   reset resolves as stale and is dropped instead of corrupting the
//!   fresher list.

use crate::page::{Page, PageCursor};

/// Default distance (in viewport units) from the bottom of the content at
/// which consumers should trigger a continuation fetch.
pub const NEAR_BOTTOM_THRESHOLD: f64 = 20.0;

/// Scroll geometry check: has the viewport scrolled close enough to the end
/// of the content to warrant loading the next page? The loader itself never
/// sees viewport geometry; this helper is for the consumer tracking it.
pub fn near_bottom(visible_height: f64, scroll_offset: f64, content_height: f64, threshold: f64) -> bool {
    visible_height + scroll_offset >= content_height - threshold
}

/// Request lifecycle of the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LoadingFirstPage,
    LoadingMore,
    Refreshing,
}

/// A fetch the caller should perform: `GET <collection>?page=N&<filter>`
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest<F> {
    /// Generation the request was issued under; mismatch at resolve time
    /// means the list was reset in the meantime and the response is stale.
    pub generation: u64,
    /// 1-indexed page number
    pub page: u32,
    pub filter: F,
}

/// What `resolve_loaded` / `resolve_failed` did with the outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Page-1 success: items fully replaced
    Replaced,
    /// Continuation success: items appended in page order
    Appended,
    /// Failure applied: items cleared for page 1, preserved for page > 1
    Failed,
    /// Generation mismatch: outcome dropped, state untouched
    Stale,
}

/// Named transitions, for callers that drive the loader off an event queue
#[derive(Debug)]
pub enum LoaderEvent<T, F> {
    Mount,
    FilterChanged(F),
    RefreshRequested,
    ScrolledNearBottom,
    PageLoaded { request: PageRequest<F>, page: Page<T> },
    PageFailed { request: PageRequest<F> },
}

#[derive(Debug, Clone)]
pub struct PageLoader<T, F: Clone> {
    items: Vec<T>,
    cursor: Option<PageCursor>,
    phase: Phase,
    filter: F,
    generation: u64,
}

impl<T, F: Clone> PageLoader<T, F> {
    pub fn new(filter: F) -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
            phase: Phase::Idle,
            filter,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn cursor(&self) -> Option<PageCursor> {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn is_loading(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// First-page fetch on mount. No-op once a page has been loaded or while
    /// any load is in flight.
    pub fn start(&mut self) -> Option<PageRequest<F>> {
        if self.phase != Phase::Idle || self.cursor.is_some() {
            return None;
        }
        self.phase = Phase::LoadingFirstPage;
        Some(self.request(1))
    }

    /// Replace the filter and restart from page 1. Accumulated items are
    /// dropped immediately so stale results never show under the new filter.
    pub fn apply_filter(&mut self, filter: F) -> PageRequest<F> {
        self.filter = filter;
        self.restart(Phase::LoadingFirstPage)
    }

    /// Back to the unfiltered listing
    pub fn reset_filter(&mut self) -> PageRequest<F>
    where
        F: Default,
    {
        self.apply_filter(F::default())
    }

    /// Forced re-fetch of page 1 under the current filter (pull-to-refresh).
    /// Takes precedence over any in-flight load: the generation bump makes
    /// the older response resolve as stale.
    pub fn refresh(&mut self) -> PageRequest<F> {
        self.restart(Phase::Refreshing)
    }

    /// Continuation fetch of the next page. Emits nothing unless the loader
    /// is idle and the cursor reports more pages.
    pub fn load_more(&mut self) -> Option<PageRequest<F>> {
        if self.phase != Phase::Idle {
            return None;
        }
        let next = self.cursor.as_ref()?.next_page()?;
        self.phase = Phase::LoadingMore;
        Some(self.request(next))
    }

    /// Apply a successful fetch outcome
    pub fn resolve_loaded(&mut self, request: &PageRequest<F>, page: Page<T>) -> Resolution {
        if request.generation != self.generation {
            return Resolution::Stale;
        }
        self.phase = Phase::Idle;
        self.cursor = Some(page.cursor);
        if request.page == 1 {
            self.items = page.items;
            Resolution::Replaced
        } else {
            self.items.extend(page.items);
            Resolution::Appended
        }
    }

    /// Apply a failed fetch outcome. The phase always returns to idle so a
    /// rejected fetch can never leave the loader stuck loading; the caller
    /// keeps the error itself for display.
    pub fn resolve_failed(&mut self, request: &PageRequest<F>) -> Resolution {
        if request.generation != self.generation {
            return Resolution::Stale;
        }
        self.phase = Phase::Idle;
        if request.page == 1 {
            self.items.clear();
            self.cursor = None;
        }
        Resolution::Failed
    }

    /// Event-queue entry point; returns the fetch to perform, if any
    pub fn handle(&mut self, event: LoaderEvent<T, F>) -> Option<PageRequest<F>> {
        match event {
            LoaderEvent::Mount => self.start(),
            LoaderEvent::FilterChanged(filter) => Some(self.apply_filter(filter)),
            LoaderEvent::RefreshRequested => Some(self.refresh()),
            LoaderEvent::ScrolledNearBottom => self.load_more(),
            LoaderEvent::PageLoaded { request, page } => {
                self.resolve_loaded(&request, page);
                None
            }
            LoaderEvent::PageFailed { request } => {
                self.resolve_failed(&request);
                None
            }
        }
    }

    fn restart(&mut self, phase: Phase) -> PageRequest<F> {
        self.generation += 1;
        self.items.clear();
        self.cursor = None;
        self.phase = phase;
        self.request(1)
    }

    fn request(&self, page: u32) -> PageRequest<F> {
        PageRequest {
            generation: self.generation,
            page,
            filter: self.filter.clone(),
        }
    }
}

impl<T, F: Clone + Default> Default for PageLoader<T, F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pages of i64 ids; the dataset of the worked example in the design
    // discussion: 5 records, page size 2, 3 pages.
    fn page(ids: &[i64], current_page: u32, last_page: u32, total: u64) -> Page<i64> {
        Page {
            items: ids.to_vec(),
            cursor: PageCursor { current_page, last_page, total, per_page: 2 },
        }
    }

    fn loaded_first_page(loader: &mut PageLoader<i64, String>) {
        let req = loader.start().expect("mount should fetch page 1");
        loader.resolve_loaded(&req, page(&[1, 2], 1, 3, 5));
    }

    #[test]
    fn page_one_replace_is_idempotent() {
        let mut loader = PageLoader::<i64, String>::new("expense".to_string());
        loaded_first_page(&mut loader);
        assert_eq!(loader.items(), &[1, 2]);

        // Same page fetched again under the same filter: replaced, not doubled.
        let req = loader.refresh();
        let res = loader.resolve_loaded(&req, page(&[1, 2], 1, 3, 5));
        assert_eq!(res, Resolution::Replaced);
        assert_eq!(loader.items(), &[1, 2]);
    }

    #[test]
    fn load_more_appends_in_page_order() {
        let mut loader = PageLoader::<i64, String>::new(String::new());
        loaded_first_page(&mut loader);

        let req = loader.load_more().expect("page 2 available");
        assert_eq!(req.page, 2);
        let res = loader.resolve_loaded(&req, page(&[3, 4], 2, 3, 5));
        assert_eq!(res, Resolution::Appended);
        assert_eq!(loader.items(), &[1, 2, 3, 4]);
    }

    #[test]
    fn second_load_more_while_in_flight_is_a_no_op() {
        let mut loader = PageLoader::<i64, String>::new(String::new());
        loaded_first_page(&mut loader);

        let first = loader.load_more();
        assert!(first.is_some());
        // The near-bottom condition fires again before the response lands.
        assert!(loader.load_more().is_none());
        assert!(loader.load_more().is_none());
    }

    #[test]
    fn load_more_during_first_page_load_is_a_no_op() {
        let mut loader = PageLoader::<i64, String>::new(String::new());
        let _first = loader.start().unwrap();
        assert_eq!(loader.phase(), Phase::LoadingFirstPage);
        assert!(loader.load_more().is_none());
    }

    #[test]
    fn filter_change_drops_items_from_old_filter() {
        let mut loader = PageLoader::<i64, String>::new("A".to_string());
        loaded_first_page(&mut loader);
        let req = loader.load_more().unwrap();
        loader.resolve_loaded(&req, page(&[3, 4], 2, 3, 5));
        assert_eq!(loader.items().len(), 4);

        let req = loader.apply_filter("B".to_string());
        assert_eq!(req.page, 1);
        assert_eq!(req.filter, "B");
        // Cleared immediately, before the response arrives.
        assert!(loader.items().is_empty());

        loader.resolve_loaded(&req, page(&[10, 11], 1, 1, 2));
        assert_eq!(loader.items(), &[10, 11]);
    }

    #[test]
    fn reset_filter_goes_back_to_the_default() {
        let mut loader = PageLoader::<i64, String>::new("expense".to_string());
        loaded_first_page(&mut loader);

        let req = loader.reset_filter();
        assert_eq!(req.filter, "");
        assert_eq!(req.page, 1);
        assert!(loader.items().is_empty());
    }

    #[test]
    fn no_fetch_past_last_page() {
        let mut loader = PageLoader::<i64, String>::new(String::new());
        let req = loader.start().unwrap();
        loader.resolve_loaded(&req, page(&[1, 2], 1, 1, 2));

        assert!(loader.load_more().is_none());
        assert_eq!(loader.items(), &[1, 2]);
        assert_eq!(loader.phase(), Phase::Idle);
    }

    #[test]
    fn page_one_failure_clears_the_list() {
        let mut loader = PageLoader::<i64, String>::new(String::new());
        loaded_first_page(&mut loader);
        assert_eq!(loader.items().len(), 2);

        let req = loader.refresh();
        let res = loader.resolve_failed(&req);
        assert_eq!(res, Resolution::Failed);
        assert!(loader.items().is_empty());
        assert!(loader.cursor().is_none());
        assert_eq!(loader.phase(), Phase::Idle);
    }

    #[test]
    fn continuation_failure_preserves_the_list() {
        let mut loader = PageLoader::<i64, String>::new(String::new());
        loaded_first_page(&mut loader);

        let req = loader.load_more().unwrap();
        let res = loader.resolve_failed(&req);
        assert_eq!(res, Resolution::Failed);
        assert_eq!(loader.items(), &[1, 2]);
        // Cursor untouched, so the continuation can be retried.
        assert_eq!(loader.cursor().unwrap().current_page, 1);
        assert_eq!(loader.phase(), Phase::Idle);
    }

    #[test]
    fn refresh_wins_over_slow_load_more() {
        let mut loader = PageLoader::<i64, String>::new(String::new());
        loaded_first_page(&mut loader);

        // Load-more goes out, then the user pulls to refresh before it lands.
        let stale = loader.load_more().unwrap();
        let fresh = loader.refresh();
        assert_eq!(loader.phase(), Phase::Refreshing);

        // Refresh resolves first.
        loader.resolve_loaded(&fresh, page(&[1, 2], 1, 3, 5));
        assert_eq!(loader.items(), &[1, 2]);

        // The stale continuation lands afterwards and is dropped.
        let res = loader.resolve_loaded(&stale, page(&[3, 4], 2, 3, 5));
        assert_eq!(res, Resolution::Stale);
        assert_eq!(loader.items(), &[1, 2]);
    }

    #[test]
    fn stale_failure_is_dropped_too() {
        let mut loader = PageLoader::<i64, String>::new(String::new());
        loaded_first_page(&mut loader);

        let stale = loader.load_more().unwrap();
        let fresh = loader.refresh();
        loader.resolve_loaded(&fresh, page(&[1, 2], 1, 3, 5));

        // A failed stale request must not clear anything either.
        assert_eq!(loader.resolve_failed(&stale), Resolution::Stale);
        assert_eq!(loader.items(), &[1, 2]);
        assert_eq!(loader.phase(), Phase::Idle);
    }

    #[test]
    fn mount_is_a_no_op_once_loaded() {
        let mut loader = PageLoader::<i64, String>::new(String::new());
        loaded_first_page(&mut loader);
        assert!(loader.start().is_none());
    }

    #[test]
    fn walks_all_pages_of_the_example_dataset() {
        // filter { type: "expense" }, page size 2, 5 matching records.
        let mut loader = PageLoader::<i64, String>::new("expense".to_string());

        let req = loader.start().unwrap();
        loader.resolve_loaded(&req, page(&[1, 2], 1, 3, 5));
        assert_eq!(loader.cursor().unwrap().current_page, 1);

        let req = loader.load_more().unwrap();
        loader.resolve_loaded(&req, page(&[3, 4], 2, 3, 5));
        assert_eq!(loader.items(), &[1, 2, 3, 4]);
        assert_eq!(loader.cursor().unwrap().current_page, 2);

        let req = loader.load_more().unwrap();
        loader.resolve_loaded(&req, page(&[5], 3, 3, 5));
        assert_eq!(loader.items(), &[1, 2, 3, 4, 5]);
        let cursor = loader.cursor().unwrap();
        assert_eq!(cursor.current_page, cursor.last_page);

        assert!(loader.load_more().is_none());
    }

    #[test]
    fn event_queue_drives_the_same_transitions() {
        let mut loader = PageLoader::<i64, String>::new(String::new());

        let req = loader.handle(LoaderEvent::Mount).unwrap();
        loader.handle(LoaderEvent::PageLoaded { request: req, page: page(&[1, 2], 1, 3, 5) });
        assert_eq!(loader.items(), &[1, 2]);

        let req = loader.handle(LoaderEvent::ScrolledNearBottom).unwrap();
        assert_eq!(req.page, 2);
        loader.handle(LoaderEvent::PageFailed { request: req });
        assert_eq!(loader.items(), &[1, 2]);

        assert!(loader.handle(LoaderEvent::RefreshRequested).is_some());
        assert_eq!(loader.phase(), Phase::Refreshing);
    }

    #[test]
    fn near_bottom_geometry() {
        // 600 of 2000 units visible, scrolled 1380: 1980 >= 2000 - 20.
        assert!(near_bottom(600.0, 1380.0, 2000.0, NEAR_BOTTOM_THRESHOLD));
        assert!(!near_bottom(600.0, 1000.0, 2000.0, NEAR_BOTTOM_THRESHOLD));
        // Content shorter than the viewport always counts as at the bottom.
        assert!(near_bottom(600.0, 0.0, 400.0, NEAR_BOTTOM_THRESHOLD));
    }
}
