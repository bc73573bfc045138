//! App credentials, per-call override resolution, and redacted secrets.

pub mod credentials;
pub mod secret;

pub use credentials::*;
pub use secret::*;
