//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//! Listing moderation additionally talks to two HTTP collaborators: the user service,
//! which resolves an owner's push delivery token, and the push gateway.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, validation and DTO conversion
//! - **Service Layer** (`service/`) - Business logic between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool and HTTP clients)
//! - **Startup** (`startup`) - Database connection, migrations, clients and admin bootstrap
//! - **Router** (`router`) - Axum routes and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Controller** validates the body, converts DTOs to params, calls a service
//! 3. **Service** executes business logic and orchestrates data operations
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
