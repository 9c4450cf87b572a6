use dioxus::prelude::*;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::domain::models::UserSummary;
use crate::shared::errors::AppError;
use crate::shared::services::{SearchCell, SearchState, UserSearch, UserSearchBackend};

impl SearchCell for Signal<SearchState> {
    fn update<R>(&self, f: impl FnOnce(&mut SearchState) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut state)
    }
}

/// Calls the `search_users` server function
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerSearch;

impl UserSearchBackend for ServerSearch {
    fn search_users(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<UserSummary>, AppError>> + 'static {
        async move {
            crate::server_fns::search_users(query)
                .await
                .map_err(|e| AppError::SearchFailed(e.to_string()))
        }
    }
}

type Controller = Rc<RefCell<UserSearch<Signal<SearchState>, ServerSearch>>>;

#[derive(Clone)]
pub struct UseUserSearch {
    pub state: Signal<SearchState>,
    controller: Controller,
}

impl UseUserSearch {
    /// Keystroke in the search input
    pub fn on_input(&self, value: String) {
        let scheduled = self.controller.borrow_mut().input(value);
        if let Some(task) = scheduled {
            spawn(task);
        }
    }

    /// A result row was clicked
    pub fn on_select(&self) {
        self.controller.borrow_mut().select();
    }
}

/// Debounced user search bound to the component's lifetime.
/// Unmounting cancels the pending timer and any request in flight.
pub fn use_user_search() -> UseUserSearch {
    let state = use_signal(SearchState::default);
    let controller: Controller =
        use_hook(|| Rc::new(RefCell::new(UserSearch::new(state, ServerSearch))));

    let teardown = controller.clone();
    use_drop(move || teardown.borrow_mut().cancel());

    UseUserSearch { state, controller }
}
