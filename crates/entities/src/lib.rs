//! Core entity definitions for the data server.
//!
//! This crate defines the record types shared by the store and the HTTP
//! layer.

mod data;

pub use data::*;
