//! Records, values and the typed DTOs exchanged with the backend

pub mod dto;
mod record;
mod record_serde;
mod resource;
mod value;

pub use record::*;
pub use resource::*;
pub use value::*;
