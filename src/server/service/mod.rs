//! Service layer for account and token flows.
//!
//! Most controllers call repositories directly. Services sit between controllers and
//! repositories where an operation spans more than data access:
//!
//! - **Token**: signing and verifying access tokens, generating refresh tokens
//! - **User**: password hashing, registration, login, refresh and password changes

pub mod token;
pub mod user;
