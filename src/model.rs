//! Response schemas and request enumerations for the Kakao REST API.
//!
//! Optional fields decode to `None` rather than empty strings or zeros, and nothing here
//! is mutated after decoding.

pub mod consent;
pub mod property;
pub mod session;
pub mod token;
pub mod user;
pub mod user_list;

pub use consent::*;
pub use property::*;
pub use session::*;
pub use token::*;
pub use user::*;
pub use user_list::*;
