//! User API - An in-memory user management service
//!
//! This crate provides a small REST API for user records backed by an
//! in-memory store. Records are kept sorted by case-insensitive username,
//! and usernames are unique regardless of case.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **store**: In-memory persistence
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Bind to a specific port
//! cargo run -- serve --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod store;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserDraft};
pub use errors::{AppError, AppResult};
pub use store::UserStore;
