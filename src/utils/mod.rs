//! Utility modules shared by content loading and the generators.

pub mod date;
pub mod log;
pub mod reading;
pub mod slug;
