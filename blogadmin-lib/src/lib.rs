//! Blog administration client library
//!
//! An async client for the blog admin REST backend, plus the client-side
//! table view (search, sort, paginate) and the per-entity page controllers
//! that drive it.

pub mod api;
pub mod config;
pub mod controller;
pub mod envelope;
pub mod error;
pub mod model;
pub mod storage;
pub mod table;

mod client;

pub use client::*;
pub use envelope::Envelope;
pub use envelope::EnvelopeKind;
