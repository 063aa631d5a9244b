use sqlx::PgPool;

use crate::chat::{FriendPair, Message, NewMessage, User};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Insert a user. Fails with a unique violation if the id is taken.
pub async fn add_user(pool: &PgPool, user: &User) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO users (id, username, avatar, created_at) VALUES ($1, $2, $3, $4)")
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.avatar)
        .bind(user.created_at)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete a user. Returns false if no such user existed.
pub async fn delete_user(pool: &PgPool, user_id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn all_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username, avatar, created_at FROM users ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn user_by_id(pool: &PgPool, user_id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username, avatar, created_at FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Store an unread message sent at `sent_at`. Returns the assigned id.
pub async fn send_message(
    pool: &PgPool,
    message: &NewMessage,
    sent_at: i64,
) -> Result<i64, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO messages (sender_id, receiver_id, content, sent_at, is_read) \
         VALUES ($1, $2, $3, $4, FALSE) RETURNING id",
    )
    .bind(&message.sender_id)
    .bind(&message.receiver_id)
    .bind(&message.content)
    .bind(sent_at)
    .fetch_one(pool)
    .await?;
    tracing::debug!(id, from = %message.sender_id, to = %message.receiver_id, "message stored");
    Ok(id)
}

/// Messages exchanged between two users in either direction, oldest first.
pub async fn chat_history(
    pool: &PgPool,
    user_a: &str,
    user_b: &str,
) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        "SELECT id, sender_id, receiver_id, content, sent_at, is_read FROM messages \
         WHERE (sender_id = $1 AND receiver_id = $2) OR (sender_id = $2 AND receiver_id = $1) \
         ORDER BY sent_at, id",
    )
    .bind(user_a)
    .bind(user_b)
    .fetch_all(pool)
    .await
}

/// Mark the given messages read. Returns how many rows were updated.
pub async fn mark_messages_read(pool: &PgPool, message_ids: &[i64]) -> Result<u64, sqlx::Error> {
    if message_ids.is_empty() {
        return Ok(0);
    }
    let result = sqlx::query("UPDATE messages SET is_read = TRUE WHERE id = ANY($1)")
        .bind(message_ids)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_message(pool: &PgPool, message_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM messages WHERE id = $1")
        .bind(message_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ---------------------------------------------------------------------------
// Friendships
// ---------------------------------------------------------------------------

/// Record a friendship. Returns false if the pair was already friends.
pub async fn add_friend(
    pool: &PgPool,
    pair: &FriendPair,
    created_at: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO friendships (user_low, user_high, created_at) VALUES ($1, $2, $3) \
         ON CONFLICT (user_low, user_high) DO NOTHING",
    )
    .bind(&pair.user_low)
    .bind(&pair.user_high)
    .bind(created_at)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn remove_friend(pool: &PgPool, pair: &FriendPair) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM friendships WHERE user_low = $1 AND user_high = $2")
        .bind(&pair.user_low)
        .bind(&pair.user_high)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn are_friends(pool: &PgPool, pair: &FriendPair) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM friendships WHERE user_low = $1 AND user_high = $2)",
    )
    .bind(&pair.user_low)
    .bind(&pair.user_high)
    .fetch_one(pool)
    .await
}

/// Ids of everyone `user_id` is friends with, sorted.
pub async fn friends_of(pool: &PgPool, user_id: &str) -> Result<Vec<String>, sqlx::Error> {
    let pairs = sqlx::query_as::<_, FriendPair>(
        "SELECT user_low, user_high FROM friendships WHERE user_low = $1 OR user_high = $1",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    let mut friends: Vec<String> = pairs
        .iter()
        .filter_map(|p| p.other(user_id).map(String::from))
        .collect();
    friends.sort();
    Ok(friends)
}
