//! Database operations, one module per collection

pub mod artists;
pub mod artworks;
pub mod movements;
pub mod timeline;
