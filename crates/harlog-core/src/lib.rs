//! Typed reader for HTTP Archive (HAR) files.
//!
//! [`har::HarReader`] decodes HAR 1.2 JSON into the [`har::Har`] entity graph
//! and rewrites origin-relative `redirectURL` values into absolute URLs using
//! the origin of the request that produced them.

pub mod error;
pub mod har;

pub use error::{Error, ErrorKind, Result};
