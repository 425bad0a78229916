//! # retrofit-api — Request-Layer Boundary
//!
//! The pieces a transport layer needs to serve dwelling records and
//! planner results, without the transport itself:
//!
//! - [`RecordStore`]: raw bytes by key, with an in-memory and a
//!   directory-backed implementation.
//! - [`HomeService`]: identifier validation, lookup, parsing and
//!   promotion.
//! - [`ApiError`]: maps every engine error kind to a status code and a
//!   structured JSON body (400 validation, 404 not found, 500 internal).

#![deny(missing_docs)]

pub mod error;
pub mod service;
pub mod store;

pub use error::ApiError;
pub use service::{
    home_key, plan_key, CompleteHomeResponse, HomeDetailsResponse, HomeService, PLAN_NOT_FOUND,
    UPRN_NOT_FOUND,
};
pub use store::{is_valid_key, DirectoryStore, InMemoryStore, RecordStore};
