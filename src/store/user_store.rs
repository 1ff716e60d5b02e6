//! In-memory user store.
//!
//! Records live in a vector ordered by case-insensitive username. All
//! mutations run under a single write lock, so uniqueness checks and id
//! assignment are atomic with the insert they guard.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{User, UserDraft};
use crate::errors::{AppError, AppResult, OptionExt};

/// Shared handle over the in-memory user collection.
///
/// Cloning is cheap; every clone operates on the same underlying state.
#[derive(Clone, Default)]
pub struct UserStore {
    state: Arc<RwLock<StoreState>>,
}

/// Store contents behind the lock
struct StoreState {
    /// Users ordered ascending by lowercased username
    users: Vec<User>,
    /// Next id to hand out; never decremented, so ids are never reused
    next_id: i64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user, assigning the next id.
    ///
    /// Fails with a conflict if another record already holds the username
    /// (compared case-insensitively). The record is placed at its sorted
    /// position.
    pub async fn create(&self, draft: UserDraft) -> AppResult<User> {
        let mut state = self.state.write().await;

        let key = username_key(&draft.username);
        if state
            .users
            .iter()
            .any(|u| username_key(&u.username) == key)
        {
            return Err(AppError::conflict("Username"));
        }

        let id = state.next_id;
        state.next_id += 1;

        let user = User::new(id, draft.username, draft.age, draft.email);
        let pos = state
            .users
            .partition_point(|u| username_key(&u.username) < key);
        state.users.insert(pos, user.clone());

        Ok(user)
    }

    /// Look up a user by id
    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        let state = self.state.read().await;
        state
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_not_found()
    }

    /// Look up a user by username, compared case-insensitively.
    ///
    /// The lookup value is matched as given; stored usernames are already
    /// trimmed, so a padded query will miss.
    pub async fn get_by_username(&self, username: &str) -> AppResult<User> {
        let key = username_key(username);
        let state = self.state.read().await;
        state
            .users
            .iter()
            .find(|u| username_key(&u.username) == key)
            .cloned()
            .ok_or_not_found()
    }

    /// Replace a user's fields, keeping its id.
    ///
    /// Existence is checked before uniqueness, so a missing id reports not
    /// found even when the new username would also conflict. On conflict the
    /// stored record is left untouched. The record is re-positioned to keep
    /// the collection sorted.
    pub async fn update(&self, id: i64, draft: UserDraft) -> AppResult<User> {
        let mut state = self.state.write().await;

        let pos = state
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_not_found()?;

        let key = username_key(&draft.username);
        if state
            .users
            .iter()
            .any(|u| u.id != id && username_key(&u.username) == key)
        {
            return Err(AppError::conflict("Username"));
        }

        state.users.remove(pos);
        let user = User::new(id, draft.username, draft.age, draft.email);
        let insert_at = state
            .users
            .partition_point(|u| username_key(&u.username) < key);
        state.users.insert(insert_at, user.clone());

        Ok(user)
    }

    /// Remove a user by id. The id is not reused afterwards.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut state = self.state.write().await;
        let pos = state
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_not_found()?;
        state.users.remove(pos);
        Ok(())
    }

    /// List users in sorted order, optionally restricted to an exact age
    pub async fn list(&self, age: Option<i32>) -> AppResult<Vec<User>> {
        let state = self.state.read().await;
        let users = match age {
            Some(age) => state
                .users
                .iter()
                .filter(|u| u.age == age)
                .cloned()
                .collect(),
            None => state.users.clone(),
        };
        Ok(users)
    }

    /// Remove every record and restart id assignment from 1.
    #[cfg(any(test, feature = "test-utils"))]
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        state.users.clear();
        state.next_id = 1;
    }
}

/// Case-insensitive comparison key for usernames
fn username_key(username: &str) -> String {
    username.to_lowercase()
}
