//! Postgres-backed chat/friend store.

mod chat;
mod migrate;

pub use chat::{
    add_friend, add_user, all_users, are_friends, chat_history, delete_message, delete_user,
    friends_of, mark_messages_read, remove_friend, send_message, user_by_id,
};
pub use migrate::migrate;
