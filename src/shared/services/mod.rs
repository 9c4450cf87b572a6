// Shared services: search state machine and the debounced controller
pub mod search_state;
pub mod user_search;

pub use search_state::{ResultRow, SearchDisplay, SearchIntent, SearchState, is_searchable};
pub use user_search::{SearchCell, UserSearch, UserSearchBackend};
