use serde::{Deserialize, Serialize};

/// A user as returned by the search backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub username: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub follower_count: u32,
    #[serde(default)]
    pub following_count: u32,
}

impl UserSummary {
    /// Case-insensitive substring match on username or display name.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.username.to_lowercase().contains(needle)
            || self
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(needle))
    }

    /// Whether the username starts with `needle` (lowercased)
    pub fn username_starts_with(&self, needle: &str) -> bool {
        self.username.to_lowercase().starts_with(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, name: Option<&str>) -> UserSummary {
        UserSummary {
            id: username.to_string(),
            name: name.map(str::to_string),
            username: username.to_string(),
            image: None,
            follower_count: 0,
            following_count: 0,
        }
    }

    #[test]
    fn test_matches_username_or_name() {
        let alice = user("alice", Some("Alice Liddell"));
        assert!(alice.matches("ali"));
        assert!(alice.matches("liddell"));
        assert!(!alice.matches("bob"));

        let anon = user("x_99", None);
        assert!(anon.matches("x_"));
        assert!(!anon.matches("alice"));
    }

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let parsed: UserSummary =
            serde_json::from_str(r#"{ "id": "1", "username": "alice", "followerCount": 5 }"#)
                .unwrap();
        assert_eq!(parsed.name, None);
        assert_eq!(parsed.image, None);
        assert_eq!(parsed.follower_count, 5);
        assert_eq!(parsed.following_count, 0);
    }
}
