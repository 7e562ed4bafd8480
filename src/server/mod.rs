//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the community platform: users and
//! ranks, posts and articles with their comments, likes and tags, profile comments,
//! reports, friends and blocked users, profile links, and groups with their messages.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Password hashing, login, and token issuing
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//! - **Utilities** (`util/`) - Authorization predicates and request validation
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool and token service)
//! - **Startup** (`startup`) - Tracing, database connection with migrations, and CORS
//! - **Router** (`router`) - Axum route configuration and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** authenticates the bearer token and checks the caller's role
//! 3. **Controller** validates the body, converts DTOs to params, calls a repository or service
//! 4. **Data** checks that referenced rows exist, authorizes the actor, then writes
//! 5. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
