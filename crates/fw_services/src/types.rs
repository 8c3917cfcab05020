//! Shared data types crossing the service boundary.

use serde::{Deserialize, Serialize};

/// Resolved user fields for widget display.
///
/// The field set matches what the user service resolves in bulk:
/// id, name, slug, and avatar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub uid: u64,
    pub username: String,
    pub userslug: String,
    pub picture: String,
}

/// A category visible to some viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub cid: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

/// A tag with its usage score, as returned by tag ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagSummary {
    pub value: String,
    pub score: u64,
}

/// Time window for topic listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicTerm {
    Day,
    Week,
    Month,
}

impl TopicTerm {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicTerm::Day => "day",
            TopicTerm::Week => "week",
            TopicTerm::Month => "month",
        }
    }
}

impl std::fmt::Display for TopicTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_term_as_str() {
        assert_eq!(TopicTerm::Day.as_str(), "day");
        assert_eq!(TopicTerm::Month.to_string(), "month");
    }

    #[test]
    fn test_user_summary_serializes_flat() {
        let user = UserSummary {
            uid: 3,
            username: "ada".into(),
            userslug: "ada".into(),
            picture: "/avatars/ada.png".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "ada");
        assert_eq!(json["uid"], 3);
    }
}
