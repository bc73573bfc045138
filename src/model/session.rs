//! Token introspection and session endpoint responses.

// self
use crate::_prelude::*;

/// Response of the access token info endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenInfo {
	/// Token owner's user id.
	pub id: i64,
	/// Remaining lifetime in seconds.
	pub expires_in: i64,
	/// App id the token was issued to.
	pub app_id: i64,
}

/// Response of the logout and unlink endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdResponse {
	/// User id the call applied to.
	pub id: i64,
}
