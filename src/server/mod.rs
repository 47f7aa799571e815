//! Server-side API backend.
//!
//! This module contains the complete backend implementation: HTTP endpoints for student
//! and address records, the mapping between wire DTOs and domain models, and the
//! repositories persisting them through SeaORM.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Data Layer** (`data/`) - Repository traits, their SeaORM implementations and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models, operation-specific parameter types and field validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared repositories injected into handlers
//! - **Startup** (`startup`) - Tracing setup, database connection and migrations
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the matching controller
//! 2. **Controller** parses the body, checks the route ID, converts the DTO to params
//! 3. **Data** validates the params, queries the database, converts entities to domain models
//! 4. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
pub mod state;
pub mod util;
