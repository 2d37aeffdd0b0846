//! Backend operations on top of [`AdminClient`](crate::AdminClient)
//!
//! - [`DataService`] - list / create / update / delete over a [`Resource`](crate::model::Resource)
//! - `auth` - login, register and logout

mod auth;
mod service;

pub use service::*;
