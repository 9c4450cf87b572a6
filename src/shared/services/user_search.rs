//! Debounced user search controller
//!
//! [`UserSearch`] connects the widget state, a search backend and a
//! [`Debouncer`]. It returns futures instead of spawning them so the same
//! code runs under Dioxus `spawn` in the app and straight under tokio in tests.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use super::search_state::{SearchIntent, SearchState};
use crate::domain::models::UserSummary;
use crate::shared::constants::{SEARCH_DEBOUNCE, SEARCH_REQUEST_TIMEOUT};
use crate::shared::errors::AppError;
use crate::shared::logging::{log_search_error, log_search_issued, log_search_stale};
use crate::shared::utils::{Debouncer, with_timeout};

/// Where the widget state lives
pub trait SearchCell: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut SearchState) -> R) -> R;
}

impl SearchCell for Rc<RefCell<SearchState>> {
    fn update<R>(&self, f: impl FnOnce(&mut SearchState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// The backend search action
pub trait UserSearchBackend: Clone + 'static {
    fn search_users(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<UserSummary>, AppError>> + 'static;
}

pub struct UserSearch<C, B> {
    cell: C,
    backend: B,
    debouncer: Debouncer,
    request_timeout: Duration,
}

impl<C: SearchCell, B: UserSearchBackend> UserSearch<C, B> {
    pub fn new(cell: C, backend: B) -> Self {
        Self::with_timing(cell, backend, SEARCH_DEBOUNCE, SEARCH_REQUEST_TIMEOUT)
    }

    pub fn with_timing(cell: C, backend: B, debounce: Duration, request_timeout: Duration) -> Self {
        Self {
            cell,
            backend,
            debouncer: Debouncer::new(debounce),
            request_timeout,
        }
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    /// Keystroke. Returns the debounced search to spawn, if the query is
    /// long enough; the previously returned future is aborted either way.
    pub fn input<V: Into<String>>(
        &mut self,
        value: V,
    ) -> Option<impl Future<Output = ()> + 'static + use<C, B, V>> {
        match self.cell.update(|state| state.set_query(value)) {
            SearchIntent::Clear => {
                self.debouncer.cancel();
                None
            }
            SearchIntent::Schedule { generation, .. } => {
                let work = run_search(
                    self.cell.clone(),
                    self.backend.clone(),
                    generation,
                    self.request_timeout,
                );
                Some(self.debouncer.schedule(work))
            }
        }
    }

    /// A result row was clicked
    pub fn select(&mut self) {
        self.debouncer.cancel();
        self.cell.update(SearchState::select_result);
    }

    /// Teardown: drop the pending timer and any request in flight
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}

async fn run_search<C: SearchCell, B: UserSearchBackend>(
    cell: C,
    backend: B,
    generation: u64,
    request_timeout: Duration,
) {
    let Some(query) = cell.update(|state| state.begin(generation)) else {
        log_search_stale(generation);
        return;
    };
    log_search_issued(&query, generation);

    let outcome = with_timeout(backend.search_users(query.clone()), request_timeout)
        .await
        .unwrap_or_else(|| Err(AppError::SearchTimeout(request_timeout.as_millis() as u64)));

    if let Err(e) = &outcome {
        log_search_error(&query, &e.to_string());
    }

    if !cell.update(|state| state.complete(generation, outcome)) {
        log_search_stale(generation);
    }
}
