//! Records kept by the chat/friend store.
//!
//! Times are Unix epoch milliseconds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub avatar: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub sent_at: i64,
    pub is_read: bool,
}

/// A message before the store assigns its id. Always stored unread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
}

/// Unordered pair of distinct users, stored as `(min, max)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct FriendPair {
    pub user_low: String,
    pub user_high: String,
}

impl FriendPair {
    /// Normalize `a` and `b`. Returns `None` when both name the same user.
    pub fn new(a: &str, b: &str) -> Option<Self> {
        match a.cmp(b) {
            std::cmp::Ordering::Less => Some(Self {
                user_low: a.to_string(),
                user_high: b.to_string(),
            }),
            std::cmp::Ordering::Greater => Some(Self {
                user_low: b.to_string(),
                user_high: a.to_string(),
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The other participant, if `user_id` is one of the pair.
    pub fn other(&self, user_id: &str) -> Option<&str> {
        if self.user_low == user_id {
            Some(&self.user_high)
        } else if self.user_high == user_id {
            Some(&self.user_low)
        } else {
            None
        }
    }
}
