//! GeekCo Core - Shared types library.
//!
//! This crate provides the common types used by the GeekCo catalog backend.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no filesystem access, no
//! HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Catalog document model, products, and currency conversion

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
