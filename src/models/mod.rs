// Models module - Database entity representations

pub mod friend;

pub use friend::{Friend, GeneratedId, NewFriend};
