//! Request handlers for the four user record operations.
//!
//! Each handler is an operation struct carrying the raw request input, with a
//! `send` method that validates the input, performs exactly one store call,
//! and maps the outcome to a [`Response`](crate::response::Response):
//!
//! - Validation failure: 400, no store call
//! - Store success: 200 (201 for create) with the operation's success body
//! - Store failure: 500 with a fixed generic message; the failure itself is
//!   logged via `tracing` for operator diagnosis and never returned

/// Create a user record with a generated id.
pub mod create_user;

/// Delete a user record by id.
pub mod delete_user;

/// List all user records.
pub mod list_users;

/// Overwrite a user record's full field set.
pub mod update_user;
