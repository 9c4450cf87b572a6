//! In-memory user directory backing the search endpoint

use std::cmp::Reverse;
use std::path::Path;

use crate::domain::models::UserSummary;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::log_directory_loaded;
use crate::shared::services::is_searchable;

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<UserSummary>,
}

impl UserDirectory {
    pub fn new(users: Vec<UserSummary>) -> Self {
        Self { users }
    }

    /// Parse a JSON array of users
    pub fn from_json(raw: &str) -> Result<Self> {
        let users: Vec<UserSummary> = serde_json::from_str(raw)?;
        Ok(Self::new(users))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let directory = Self::from_json(&raw).map_err(|e| AppError::InvalidFixture {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        log_directory_loaded(path, directory.len());
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Users whose username or name contains `query` (case-insensitive).
    ///
    /// Username prefix matches rank first, then more followers, then
    /// username. Queries under the minimum length return nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<UserSummary> {
        if !is_searchable(query) {
            return Vec::new();
        }
        let needle = query.trim().to_lowercase();

        let mut matches: Vec<&UserSummary> =
            self.users.iter().filter(|user| user.matches(&needle)).collect();

        matches.sort_by_key(|user| {
            (
                !user.username_starts_with(&needle),
                Reverse(user.follower_count),
                user.username.to_lowercase(),
            )
        });

        matches.into_iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        { "id": "1", "name": "Alice", "username": "alice", "image": null, "followerCount": 5, "followingCount": 3 },
        { "id": "2", "name": "Malia Khan", "username": "mkhan", "followerCount": 120 },
        { "id": "3", "name": null, "username": "alistair", "followerCount": 40 },
        { "id": "4", "name": "Bob", "username": "bob", "followerCount": 900 }
    ]"#;

    fn directory() -> UserDirectory {
        UserDirectory::from_json(FIXTURE).unwrap()
    }

    fn usernames(users: &[UserSummary]) -> Vec<&str> {
        users.iter().map(|u| u.username.as_str()).collect()
    }

    #[test]
    fn test_prefix_matches_rank_first() {
        let results = directory().search("ali", 10);
        assert_eq!(usernames(&results), vec!["alistair", "alice", "mkhan"]);
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let results = directory().search("  BOB ", 10);
        assert_eq!(usernames(&results), vec!["bob"]);
    }

    #[test]
    fn test_short_query_returns_nothing() {
        assert!(directory().search("a", 10).is_empty());
        assert!(directory().search("   ", 10).is_empty());
    }

    #[test]
    fn test_limit_caps_results() {
        let results = directory().search("al", 1);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(UserDirectory::from_json("{ not json").is_err());
    }
}
