//! RIS HTTP crate providing the API wire types and a typed client
//!
//! The client half is split into a public client for the unauthenticated
//! login/register endpoints and a bearer-authenticated client for the
//! profile endpoints. Both compile on native and wasm32 targets.

pub mod types;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::error::ClientError;
