//! Interaction state of the user search widget
//!
//! Every keystroke bumps a generation counter. A search outcome is applied
//! only when it carries the current generation, so a response that lost the
//! race to a newer keystroke never overwrites fresher state.

use crate::domain::models::UserSummary;
use crate::shared::constants::{
    AVATAR_ALT_FALLBACK, DEFAULT_AVATAR, MIN_QUERY_LEN, SEARCH_ERROR_MESSAGE, UNNAMED_USER,
};
use crate::shared::errors::AppError;

/// What the widget should do after the query changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    /// Query too short: nothing to fetch, pending work must be dropped
    Clear,
    /// Fetch `query` once the quiet period elapses, tagged with `generation`
    Schedule { generation: u64, query: String },
}

/// Which panel the widget shows below the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDisplay<'a> {
    Error(&'a str),
    Results(&'a [UserSummary]),
    Idle,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    query: String,
    results: Vec<UserSummary>,
    is_searching: bool,
    error: Option<String>,
    generation: u64,
}

/// Whether `query` is long enough to be sent to the backend
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[UserSummary] {
        &self.results
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record a keystroke. Any earlier request is invalidated.
    pub fn set_query(&mut self, value: impl Into<String>) -> SearchIntent {
        self.query = value.into();
        self.generation += 1;
        self.error = None;
        self.is_searching = false;

        if is_searchable(&self.query) {
            SearchIntent::Schedule {
                generation: self.generation,
                query: self.query.clone(),
            }
        } else {
            self.results.clear();
            SearchIntent::Clear
        }
    }

    /// Debounce elapsed: mark the request as in flight and hand back the
    /// query to send. `None` if a newer keystroke superseded `generation`.
    pub fn begin(&mut self, generation: u64) -> Option<String> {
        if generation != self.generation {
            return None;
        }

        self.is_searching = true;
        self.error = None;
        Some(self.query.clone())
    }

    /// Apply a backend outcome. Returns `false` when the outcome is stale
    /// and was discarded.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<Vec<UserSummary>, AppError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }

        match outcome {
            Ok(results) => {
                self.results = results;
                self.error = None;
            }
            Err(_) => {
                self.results.clear();
                self.error = Some(SEARCH_ERROR_MESSAGE.to_string());
            }
        }
        self.is_searching = false;
        true
    }

    /// A result was clicked: back to an empty, idle widget
    pub fn select_result(&mut self) {
        self.query.clear();
        self.results.clear();
        self.error = None;
        self.is_searching = false;
        self.generation += 1;
    }

    /// Error first, then results, otherwise nothing below the input
    pub fn display(&self) -> SearchDisplay<'_> {
        if let Some(error) = self.error.as_deref() {
            SearchDisplay::Error(error)
        } else if !self.results.is_empty() {
            SearchDisplay::Results(&self.results)
        } else {
            SearchDisplay::Idle
        }
    }
}

/// Display strings for one dropdown row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub key: String,
    pub display_name: String,
    pub handle: String,
    pub followers_label: String,
    pub avatar_src: String,
    pub avatar_alt: String,
    pub profile_handle: String,
}

impl From<&UserSummary> for ResultRow {
    fn from(user: &UserSummary) -> Self {
        Self {
            key: user.id.clone(),
            display_name: user.name.clone().unwrap_or_else(|| UNNAMED_USER.to_string()),
            handle: format!("@{}", user.username),
            followers_label: format!("{} followers", user.follower_count),
            avatar_src: user.image.clone().unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            avatar_alt: user.name.clone().unwrap_or_else(|| AVATAR_ALT_FALLBACK.to_string()),
            profile_handle: user.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserSummary {
        UserSummary {
            id: "1".to_string(),
            name: Some("Alice".to_string()),
            username: "alice".to_string(),
            image: None,
            follower_count: 5,
            following_count: 3,
        }
    }

    #[test]
    fn test_short_queries_clear_and_never_schedule() {
        let mut state = SearchState::default();
        for query in ["", " ", "a", " a ", "\t\n", "é"] {
            assert_eq!(state.set_query(query), SearchIntent::Clear, "query {query:?}");
            assert!(state.results().is_empty());
            assert_eq!(state.error(), None);
            assert!(!state.is_searching());
        }
    }

    #[test]
    fn test_short_query_drops_previous_results() {
        let mut state = SearchState::default();
        let SearchIntent::Schedule { generation, .. } = state.set_query("al") else {
            panic!("expected a scheduled search");
        };
        state.begin(generation);
        assert!(state.complete(generation, Ok(vec![alice()])));

        assert_eq!(state.set_query("a"), SearchIntent::Clear);
        assert!(state.results().is_empty());
        assert_eq!(state.query(), "a");
    }

    #[test]
    fn test_query_is_updated_immediately() {
        let mut state = SearchState::default();
        let intent = state.set_query("al ");
        assert_eq!(state.query(), "al ");
        assert_eq!(
            intent,
            SearchIntent::Schedule { generation: 1, query: "al ".to_string() }
        );
    }

    #[test]
    fn test_success_replaces_results() {
        let mut state = SearchState::default();
        let SearchIntent::Schedule { generation, .. } = state.set_query("al") else {
            panic!("expected a scheduled search");
        };

        assert_eq!(state.begin(generation).as_deref(), Some("al"));
        assert!(state.is_searching());

        assert!(state.complete(generation, Ok(vec![alice()])));
        assert!(!state.is_searching());
        assert_eq!(state.results(), &[alice()]);
        assert_eq!(state.display(), SearchDisplay::Results(&[alice()]));
    }

    #[test]
    fn test_failure_sets_generic_error() {
        let mut state = SearchState::default();
        let SearchIntent::Schedule { generation, .. } = state.set_query("al") else {
            panic!("expected a scheduled search");
        };
        state.begin(generation);

        let applied = state.complete(
            generation,
            Err(AppError::SearchFailed("connection reset".to_string())),
        );

        assert!(applied);
        assert!(!state.is_searching());
        assert!(state.results().is_empty());
        assert_eq!(state.error(), Some(SEARCH_ERROR_MESSAGE));
        assert_eq!(state.display(), SearchDisplay::Error(SEARCH_ERROR_MESSAGE));
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut state = SearchState::default();
        let SearchIntent::Schedule { generation: old, .. } = state.set_query("al") else {
            panic!("expected a scheduled search");
        };
        state.begin(old);

        let SearchIntent::Schedule { generation: new, .. } = state.set_query("ali") else {
            panic!("expected a scheduled search");
        };
        assert!(!state.is_searching());

        assert!(!state.complete(old, Ok(vec![alice()])));
        assert!(state.results().is_empty());
        assert_eq!(state.begin(old), None);
        assert_eq!(state.begin(new).as_deref(), Some("ali"));
    }

    #[test]
    fn test_new_input_clears_error() {
        let mut state = SearchState::default();
        let SearchIntent::Schedule { generation, .. } = state.set_query("al") else {
            panic!("expected a scheduled search");
        };
        state.begin(generation);
        state.complete(generation, Err(AppError::SearchTimeout(8000)));
        assert!(state.error().is_some());

        state.set_query("alb");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_select_result_resets_widget() {
        let mut state = SearchState::default();
        let SearchIntent::Schedule { generation, .. } = state.set_query("al") else {
            panic!("expected a scheduled search");
        };
        state.begin(generation);
        state.complete(generation, Ok(vec![alice()]));

        state.select_result();

        assert_eq!(state.query(), "");
        assert!(state.results().is_empty());
        assert_eq!(state.display(), SearchDisplay::Idle);
        // Nothing issued before the click may land afterwards
        assert!(!state.complete(generation, Ok(vec![alice()])));
    }

    #[test]
    fn test_result_row_fallbacks() {
        let row = ResultRow::from(&alice());
        assert_eq!(row.display_name, "Alice");
        assert_eq!(row.handle, "@alice");
        assert_eq!(row.followers_label, "5 followers");
        assert_eq!(row.avatar_src, DEFAULT_AVATAR);
        assert_eq!(row.avatar_alt, "Alice");
        assert_eq!(row.profile_handle, "alice");

        let anonymous = UserSummary {
            name: None,
            image: Some("https://cdn.example.com/b.png".to_string()),
            ..alice()
        };
        let row = ResultRow::from(&anonymous);
        assert_eq!(row.display_name, UNNAMED_USER);
        assert_eq!(row.avatar_alt, AVATAR_ALT_FALLBACK);
        assert_eq!(row.avatar_src, "https://cdn.example.com/b.png");
    }
}
