//! Session state: token persistence, context provider, expiry handling

pub mod context;
pub mod error_handler;
pub mod error_messages;
pub mod storage;

pub use context::{
    Session, SessionAction, SessionContext, SessionProvider, use_is_authenticated, use_session,
};
