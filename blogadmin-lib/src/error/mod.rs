//! Error types

mod api;
mod config;
mod field;
mod storage;

pub use api::*;
pub use config::*;
pub use field::*;
pub use storage::*;
