//! RIS HTTP client

pub mod auth_typed;
pub mod error;
pub mod profile_typed;
pub mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedRisClient, PublicRisClient, TypedClientBuilder};
