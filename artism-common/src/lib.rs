//! # Artism Common Library
//!
//! Shared code for the Artism platform backend:
//! - Entity models (Artist, Artwork, ArtMovement, TimelineNode)
//! - Database initialization and schema
//! - Filter predicates for in-memory list filtering
//! - Pagination
//! - Configuration loading
//! - Error types

pub mod config;
pub mod db;
pub mod error;
pub mod filter;
pub mod models;
pub mod pagination;

pub use error::{Error, Result};
