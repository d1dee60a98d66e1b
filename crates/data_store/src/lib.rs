//! Storage for the `data` table.
//!
//! This crate provides a storage abstraction over the single `data` table.
//! It supports MySQL (the production deployment), SQLite (local single-file
//! use), and an in-memory map for tests.

mod error;
mod memory;
mod mysql;
mod schema;
mod sqlite;
mod store;
mod traits;

pub use error::*;
pub use memory::*;
pub use mysql::*;
pub use sqlite::*;
pub use store::*;
pub use traits::*;
