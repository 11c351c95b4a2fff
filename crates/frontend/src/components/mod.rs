//! Shared UI components

pub mod protected;
pub mod spinner;
pub mod toast;

pub use protected::ProtectedRoute;
pub use spinner::LoadingSpinner;
pub use toast::{ToastProvider, use_toast};
