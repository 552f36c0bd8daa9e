//! Product list screen: paginated table, debounced search, delete with
//! confirmation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use catalog_core::pagination::{PageRequest, DEFAULT_LIMIT};
use catalog_core::types::DbId;

use crate::api::ProductApi;
use crate::debounce::Debouncer;
use crate::dialog::Dialog;
use crate::model::{ListQuery, Product};

/// Quiet period after the last keystroke before a search is sent.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Rows requested per page.
pub const PAGE_SIZE: i64 = DEFAULT_LIMIT;

pub const MSG_LOAD_FAILED: &str = "Failed to load products.";
pub const MSG_DELETE_FAILED: &str = "Failed to delete product.";
pub const MSG_CONFIRM_DELETE: &str = "Are you sure you want to delete this product?";

/// Everything the list screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub products: Vec<Product>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_products: i64,
    /// Search box contents as typed.
    pub search: String,
    pub loading: bool,
    pub pending_delete: Option<DbId>,
    pub dialog: Option<Dialog>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            current_page: 1,
            total_pages: 0,
            total_products: 0,
            search: String::new(),
            loading: false,
            pending_delete: None,
            dialog: None,
        }
    }
}

/// A pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Page(i64),
    Next,
    Last,
}

/// Which pagination controls are enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub first: bool,
    pub prev: bool,
    pub next: bool,
    pub last: bool,
    pub pages: Vec<i64>,
}

struct Shared {
    api: Arc<dyn ProductApi>,
    state: Mutex<ListState>,
    /// Bumped for every list request; only the latest one may apply.
    generation: AtomicU64,
    limit: i64,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn fetch(&self, page: i64, search: String) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.lock().loading = true;

        tracing::debug!(page, search = %search, generation, "Fetching products");

        let query = ListQuery {
            page,
            limit: self.limit,
            search,
        };
        let result = self.api.list(&query).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding stale product list response");
            return;
        }

        let mut state = self.lock();
        state.loading = false;
        match result {
            Ok(page) => {
                state.products = page.products;
                state.current_page = page.current_page;
                state.total_pages = page.total_pages;
                state.total_products = page.total_products;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch products");
                state.dialog = Some(Dialog::error(e.user_message(MSG_LOAD_FAILED)));
            }
        }
    }
}

/// View model of the product list screen.
///
/// Must be used inside a tokio runtime: debounced searches run on spawned
/// tasks.
pub struct ListView {
    shared: Arc<Shared>,
    debouncer: Debouncer,
}

impl ListView {
    pub fn new(api: Arc<dyn ProductApi>) -> Self {
        Self::with_options(api, PAGE_SIZE, SEARCH_DEBOUNCE)
    }

    pub fn with_options(api: Arc<dyn ProductApi>, limit: i64, debounce: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                api,
                state: Mutex::new(ListState::default()),
                generation: AtomicU64::new(0),
                limit,
            }),
            debouncer: Debouncer::new(debounce),
        }
    }

    /// Snapshot of the current screen state.
    pub fn state(&self) -> ListState {
        self.shared.lock().clone()
    }

    /// Fetch the current page with the current search text.
    pub async fn load(&self) {
        let (page, search) = {
            let state = self.shared.lock();
            (state.current_page, state.search.clone())
        };
        self.shared.fetch(page, search).await;
    }

    /// Update the search box.
    ///
    /// Non-empty text schedules a page-1 fetch after [`SEARCH_DEBOUNCE`],
    /// replacing any fetch still waiting. Clearing the box drops the pending
    /// fetch and reloads page 1 right away.
    pub async fn set_search(&self, text: impl Into<String>) {
        let text = text.into();
        self.shared.lock().search = text.clone();

        if text.is_empty() {
            self.debouncer.cancel();
            self.shared.fetch(1, text).await;
            return;
        }

        let shared = Arc::clone(&self.shared);
        self.debouncer
            .schedule(async move { shared.fetch(1, text).await });
    }

    /// Move to another page. Returns `false` (and does nothing) when the
    /// target lies outside `1..=total_pages`.
    pub async fn go_to(&self, nav: PageNav) -> bool {
        let (target, search) = {
            let state = self.shared.lock();
            let target = match nav {
                PageNav::First => 1,
                PageNav::Prev => state.current_page - 1,
                PageNav::Page(page) => page,
                PageNav::Next => state.current_page + 1,
                PageNav::Last => state.total_pages,
            };
            if target < 1 || target > state.total_pages {
                return false;
            }
            (target, state.search.clone())
        };

        self.debouncer.cancel();
        self.shared.fetch(target, search).await;
        true
    }

    /// Number shown in the first column for the `index`-th row.
    pub fn row_number(&self, index: usize) -> i64 {
        let page = self.shared.lock().current_page;
        PageRequest {
            page,
            limit: self.shared.limit,
        }
        .row_number(index)
    }

    pub fn controls(&self) -> PageControls {
        let state = self.shared.lock();
        PageControls {
            first: state.current_page > 1,
            prev: state.current_page > 1,
            next: state.current_page < state.total_pages,
            last: state.current_page < state.total_pages,
            pages: (1..=state.total_pages).collect(),
        }
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&self, id: DbId) {
        let mut state = self.shared.lock();
        state.pending_delete = Some(id);
        state.dialog = Some(Dialog::confirm(MSG_CONFIRM_DELETE));
    }

    pub fn cancel_delete(&self) {
        let mut state = self.shared.lock();
        state.pending_delete = None;
        state.dialog = None;
    }

    /// Delete the product awaiting confirmation, then reload.
    ///
    /// Reloads the current page, or the previous one when the deleted row
    /// was the last on a page past the first.
    pub async fn confirm_delete(&self) {
        let (id, page, search) = {
            let mut state = self.shared.lock();
            state.dialog = None;
            let Some(id) = state.pending_delete.take() else {
                return;
            };
            let page = if state.products.len() == 1 && state.current_page > 1 {
                state.current_page - 1
            } else {
                state.current_page
            };
            (id, page, state.search.clone())
        };

        match self.shared.api.delete(id).await {
            Ok(message) => {
                tracing::info!(product_id = id, %message, "Product deleted");
                self.debouncer.cancel();
                self.shared.fetch(page, search).await;
            }
            Err(e) => {
                tracing::warn!(product_id = id, error = %e, "Failed to delete product");
                self.shared.lock().dialog =
                    Some(Dialog::error(e.user_message(MSG_DELETE_FAILED)));
            }
        }
    }

    pub fn dismiss_dialog(&self) {
        self.shared.lock().dialog = None;
    }
}
