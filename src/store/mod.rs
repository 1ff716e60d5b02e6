//! In-memory persistence layer.

mod user_store;

pub use user_store::UserStore;
