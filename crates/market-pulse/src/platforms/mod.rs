//! Messaging platforms the update is delivered to

pub mod telegram;

pub use telegram::{SendOptions, TelegramClient};
