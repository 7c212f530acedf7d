#![deny(missing_docs)]
#![deny(warnings)]

//! # User Record Service
//!
//! Stateless CRUD request handlers for user records over a managed key-value store.
//!
//! ## Overview
//!
//! This library implements four independent request handlers (list, create, update,
//! delete) that each:
//! - Validate the shape of the incoming request (required fields present and non-empty)
//! - Perform exactly one operation against an external key-value store
//! - Return an HTTP-style status code and JSON body
//!
//! The store is an injected collaborator behind the narrow [`store::Store`] trait
//! (scan, put, update, delete), with a DynamoDB-backed implementation for production
//! and an in-memory implementation for tests. Store failures are logged in full and
//! collapsed to a generic 500 response; error detail never crosses the trust boundary.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use aws_sdk_dynamodb::Client;
//! use user_record_service::{handlers, record, service, store};
//!
//! # async fn example(client: Client) {
//! let store = store::dynamodb::DynamoStore::new(client);
//! let service = service::UserRecordService::new(store, "UsersDB");
//!
//! let create = handlers::create_user::CreateUser {
//!     payload: record::UserPayload {
//!         first_name: Some("John".to_string()),
//!         last_name: Some("Doe".to_string()),
//!         email: Some("john@example.com".to_string()),
//!         phone_number: Some("555-0100".to_string()),
//!         password: Some("hunter2".to_string()),
//!     },
//! };
//! let response = create.send(&service).await;
//! assert_eq!(response.status_code, 201);
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@record`] - The `UserRecord` entity and request payload validation
//! - [`mod@handlers`] - The four request handlers (list, create, update, delete)
//! - [`mod@store`] - The key-value store trait and its implementations
//! - [`mod@service`] - Wiring of store, id generator, and collection name

/// Error taxonomy: validation errors and opaque store errors.
pub mod error;

/// Request handlers for the four user record operations.
///
/// This module provides one handler per operation:
/// - Listing all user records
/// - Creating a record with a generated id
/// - Overwriting a record's full field set
/// - Deleting a record by id
pub mod handlers;

/// Record identifier generation.
pub mod id;

/// The `UserRecord` entity and request payload types.
pub mod record;

/// HTTP-style status/body response pairs.
pub mod response;

/// The `UserRecordService` tying a store, an id generator, and a collection together.
pub mod service;

/// Key-value store collaborator trait and implementations.
///
/// This module provides:
/// - The [`Store`](store::Store) trait consumed by the handlers
/// - A DynamoDB-backed implementation
/// - An in-memory implementation for tests and local use
pub mod store;
