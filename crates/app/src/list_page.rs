//! The list/search/paginate/mutate page pattern.
//!
//! Every listing page in the app is an instance of this state machine:
//! the full collection is loaded on mount, short queries filter that
//! snapshot locally, longer queries debounce into a server-side paginated
//! search, and deletes are optimistic with a timed undo window. Entity
//! pages differ only in configuration (search fields, undo duration,
//! delete role gate, page size).

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use models::{ListRow, Role};
use services::{EntityGateway, error::GENERIC_ERROR_MESSAGE};
use tracing::{debug, warn};

use crate::timer::CancellableTimer;

/// Pause after the last keystroke before a remote search fires.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(325);

/// Queries shorter than this never leave the client; they are served from
/// the already-loaded snapshot.
pub const REMOTE_QUERY_MIN_LEN: usize = 2;

#[derive(Debug, Clone)]
pub struct ListConfig {
    pub page_size: u32,
    pub debounce: Duration,
    /// How long the undo affordance stays open before the delete commits.
    pub undo_window: Duration,
    /// Role required to delete on this page; `None` means any signed-in
    /// user may delete.
    pub delete_role: Option<Role>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            debounce: DEBOUNCE_DELAY,
            undo_window: Duration::from_secs(5),
            delete_role: None,
        }
    }
}

/// The removed item held during the undo window, with the index it must
/// return to if the delete is undone or the commit fails.
struct PendingDelete<T> {
    item: T,
    index: usize,
}

struct ListState<T> {
    /// Unfiltered collection snapshot from the last full load.
    all_items: Vec<T>,
    /// Rows currently displayed.
    items: Vec<T>,
    query: String,
    page: u32,
    /// Row count of the last remote response; feeds the has-next
    /// heuristic.
    last_count: usize,
    /// True only when the current listing came from a server-side
    /// paginated search.
    remote_mode: bool,
    /// Best known collection size. `None` in remote mode when the search
    /// path did not report `totalElements`.
    total: Option<usize>,
    pending_delete: Option<PendingDelete<T>>,
    error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            all_items: Vec::new(),
            items: Vec::new(),
            query: String::new(),
            page: 0,
            last_count: 0,
            remote_mode: false,
            total: None,
            pending_delete: None,
            error: None,
        }
    }
}

struct Inner<T, G> {
    gateway: G,
    config: ListConfig,
    role: Option<Role>,
    state: Mutex<ListState<T>>,
}

fn normalized(query: &str) -> String {
    query.trim().to_lowercase()
}

impl<T, G> Inner<T, G>
where
    T: ListRow + Send + Sync + 'static,
    G: EntityGateway<T> + 'static,
{
    fn can_delete(&self) -> bool {
        match self.config.delete_role {
            None => true,
            Some(required) => self.role == Some(required),
        }
    }

    async fn load_full(&self) {
        let items = self.gateway.list(None, None).await;
        let mut state = self.state.lock().unwrap();
        state.all_items = items.clone();
        state.items = items;
        state.remote_mode = false;
        state.page = 0;
        state.last_count = state.items.len();
        state.total = Some(state.all_items.len());
    }

    /// Issue a remote search and apply the response, unless the query box
    /// has moved on in the meantime: then the response is stale and is
    /// silently dropped. A slow early response must never clobber the
    /// result of a newer one.
    async fn run_remote_search(&self, query: String, page: u32) {
        let result = self
            .gateway
            .search(&query, page, self.config.page_size)
            .await;
        let mut state = self.state.lock().unwrap();
        if normalized(&state.query) != normalized(&query) {
            debug!(sent = %query, live = %state.query, "discarding stale search response");
            return;
        }
        state.last_count = result.items.len();
        state.items = result.items;
        state.remote_mode = true;
        state.page = page;
        state.total = result.total_elements.map(|t| t as usize);
        state.error = None;
    }

    /// Commit the pending delete to the backend. Runs when the countdown
    /// expires or when a new delete forces the previous window closed.
    async fn commit_pending(&self) {
        let pending = self.state.lock().unwrap().pending_delete.take();
        let Some(pending) = pending else {
            return;
        };
        // The gate already ran before the optimistic removal; re-checked
        // here because the commit happens later and off the event path.
        if !self.can_delete() {
            warn!("delete commit blocked by role gate");
            self.reinsert(pending, None);
            return;
        }
        let id = pending.item.id();
        let outcome = self.gateway.remove(id).await;
        if outcome.ok {
            let reload = {
                let mut state = self.state.lock().unwrap();
                state.all_items.retain(|item| item.id() != id);
                self.clamp_decision(&mut state)
            };
            if let Some((query, page, remote)) = reload {
                if remote {
                    self.run_remote_search(query, page).await;
                } else {
                    self.load_full().await;
                }
            }
        } else {
            let message = outcome
                .message
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
            self.reinsert(pending, Some(message));
        }
    }

    /// Put a removed item back where it came from, optionally surfacing an
    /// error. Used by undo and by failed commits; the UI never silently
    /// loses a row.
    fn reinsert(&self, pending: PendingDelete<T>, error: Option<String>) {
        let mut state = self.state.lock().unwrap();
        let index = pending.index.min(state.items.len());
        state.items.insert(index, pending.item);
        state.total = state.total.map(|t| t + 1);
        if error.is_some() {
            state.error = error;
        }
    }

    /// After a committed mutation, decide whether the current page index
    /// now points past the end of the data. Returns the reload target when
    /// it does. Only possible when a total is known.
    fn clamp_decision(&self, state: &mut ListState<T>) -> Option<(String, u32, bool)> {
        let total = state.total?;
        let page_size = self.config.page_size as usize;
        let total_pages = total.div_ceil(page_size).max(1);
        if (state.page as usize) < total_pages {
            return None;
        }
        state.page = (total_pages - 1) as u32;
        Some((state.query.clone(), state.page, state.remote_mode))
    }
}

pub struct ListPage<T, G>
where
    T: ListRow + Send + Sync + 'static,
    G: EntityGateway<T> + 'static,
{
    inner: Arc<Inner<T, G>>,
    debounce: CancellableTimer,
    countdown: CancellableTimer,
}

impl<T, G> ListPage<T, G>
where
    T: ListRow + Send + Sync + 'static,
    G: EntityGateway<T> + 'static,
{
    pub fn new(gateway: G, config: ListConfig, role: Option<Role>) -> Self {
        Self {
            inner: Arc::new(Inner {
                gateway,
                config,
                role,
                state: Mutex::new(ListState::default()),
            }),
            debounce: CancellableTimer::new(),
            countdown: CancellableTimer::new(),
        }
    }

    /// Mount: fetch the entire unfiltered collection.
    pub async fn load(&self) {
        self.inner.load_full().await;
    }

    /// Handle a keystroke in the search box.
    ///
    /// Short (or empty) queries are served immediately from the loaded
    /// snapshot; longer ones arm the debounce slot for a remote search.
    pub fn set_query(&mut self, query: &str) {
        self.debounce.cancel();
        let trimmed = query.trim().to_string();
        {
            let mut state = self.inner.state.lock().unwrap();
            state.query = query.to_string();
            if trimmed.len() < REMOTE_QUERY_MIN_LEN {
                state.remote_mode = false;
                state.page = 0;
                state.total = Some(state.all_items.len());
                state.items = if trimmed.is_empty() {
                    state.all_items.clone()
                } else {
                    state
                        .all_items
                        .iter()
                        .filter(|item| item.matches(&trimmed))
                        .cloned()
                        .collect()
                };
                return;
            }
        }
        let inner = Arc::clone(&self.inner);
        let sent = query.to_string();
        self.debounce.arm(self.inner.config.debounce, async move {
            inner.run_remote_search(sent, 0).await;
        });
    }

    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    /// `true` only when the last remote page came back full; there is no
    /// authoritative total in the free-text search path, so a full page is
    /// read as "probably more".
    pub fn has_next(&self) -> bool {
        let state = self.inner.state.lock().unwrap();
        state.remote_mode && state.last_count == self.inner.config.page_size as usize
    }

    pub fn can_prev(&self) -> bool {
        let state = self.inner.state.lock().unwrap();
        state.remote_mode && state.page > 0
    }

    pub async fn next_page(&self) {
        let target = {
            let state = self.inner.state.lock().unwrap();
            if !(state.remote_mode && state.last_count == self.inner.config.page_size as usize) {
                return;
            }
            (state.query.clone(), state.page + 1)
        };
        self.inner.run_remote_search(target.0, target.1).await;
    }

    pub async fn prev_page(&self) {
        let target = {
            let state = self.inner.state.lock().unwrap();
            if !(state.remote_mode && state.page > 0) {
                return;
            }
            (state.query.clone(), state.page - 1)
        };
        self.inner.run_remote_search(target.0, target.1).await;
    }

    /// Trigger an optimistic delete: the row disappears immediately and the
    /// undo countdown starts. Returns `false` when the role gate blocks or
    /// the id is not displayed. A delete triggered while another window is
    /// open force-commits the previous one first; undo windows never queue.
    pub async fn delete(&mut self, id: i64) -> bool {
        if !self.inner.can_delete() {
            warn!(id, "delete blocked by role gate");
            return false;
        }
        let has_pending = self.inner.state.lock().unwrap().pending_delete.is_some();
        if has_pending {
            self.countdown.cancel();
            self.inner.commit_pending().await;
        }
        {
            let mut state = self.inner.state.lock().unwrap();
            let Some(index) = state.items.iter().position(|item| item.id() == id) else {
                return false;
            };
            let item = state.items.remove(index);
            state.pending_delete = Some(PendingDelete { item, index });
            state.total = state.total.map(|t| t.saturating_sub(1));
        }
        let inner = Arc::clone(&self.inner);
        self.countdown
            .arm(self.inner.config.undo_window, async move {
                inner.commit_pending().await;
            });
        true
    }

    /// Undo the pending delete: the row returns to its original position
    /// and the backend is never called.
    pub fn undo(&mut self) -> bool {
        let pending = self.inner.state.lock().unwrap().pending_delete.take();
        match pending {
            Some(pending) => {
                self.countdown.cancel();
                self.inner.reinsert(pending, None);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> Vec<T> {
        self.inner.state.lock().unwrap().items.clone()
    }

    pub fn query(&self) -> String {
        self.inner.state.lock().unwrap().query.clone()
    }

    pub fn page(&self) -> u32 {
        self.inner.state.lock().unwrap().page
    }

    pub fn remote_mode(&self) -> bool {
        self.inner.state.lock().unwrap().remote_mode
    }

    pub fn total(&self) -> Option<usize> {
        self.inner.state.lock().unwrap().total
    }

    pub fn error(&self) -> Option<String> {
        self.inner.state.lock().unwrap().error.clone()
    }

    pub fn has_pending_delete(&self) -> bool {
        self.inner.state.lock().unwrap().pending_delete.is_some()
    }
}
