//! Hospital asset, inventory and procurement data layer.
//!
//! The schema itself lives in the `migrations` workspace crate; this crate
//! maps it to sea-orm entities and wraps connection, migration and seeding
//! operations for the binaries and tests.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod schema;
pub mod seed;

pub use migrations::Migrator;
