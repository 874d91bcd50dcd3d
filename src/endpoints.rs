//! Typed wrappers over [`ApiClient`](crate::client::ApiClient) for every tracker API surface.
//!
//! Each submodule hangs its operations off the client so callers never touch paths,
//! query keys, or envelope shapes directly; every call below rides the transparent
//! 401-recovery protocol in [`client`](crate::client).

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod library;
pub mod notifications;

pub use admin::*;
pub use auth::*;
pub use library::*;
