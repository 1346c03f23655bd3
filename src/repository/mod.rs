pub mod friends;

pub use friends::{initialize_store, insert_friend, list_all_friends, SEED_FRIENDS};
