//! Optional observability helpers for provider operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `kakao_api.operation` with the `operation`
//!   and `client_id` fields.
//! - Enable `metrics` to increment the `kakao_api_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Provider operations exposed by [`KakaoClient`](crate::KakaoClient).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Authorization URL construction (no network).
	AuthorizationUrl,
	/// `authorization_code` grant.
	ExchangeCode,
	/// `refresh_token` grant.
	RefreshToken,
	/// Profile lookup with a user access token.
	UserInfo,
	/// Profile lookup with the admin key.
	UserInfoByAdmin,
	/// Bulk profile lookup with the admin key.
	UsersInfo,
	/// Paginated app user id listing.
	UserList,
	/// Access token logout.
	Logout,
	/// App disconnection for the token owner.
	Unlink,
	/// Access token introspection.
	AccessTokenInfo,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::AuthorizationUrl => "authorization_url",
			Operation::ExchangeCode => "exchange_code",
			Operation::RefreshToken => "refresh_token",
			Operation::UserInfo => "user_info",
			Operation::UserInfoByAdmin => "user_info_by_admin",
			Operation::UsersInfo => "users_info",
			Operation::UserList => "user_list",
			Operation::Logout => "logout",
			Operation::Unlink => "unlink",
			Operation::AccessTokenInfo => "access_token_info",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl Outcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Attempt => "attempt",
			Outcome::Success => "success",
			Outcome::Failure => "failure",
		}
	}
}
impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn operation_labels_are_snake_case() {
		assert_eq!(Operation::UserInfoByAdmin.to_string(), "user_info_by_admin");
		assert_eq!(Operation::AccessTokenInfo.as_str(), "access_token_info");
		assert_eq!(Outcome::Failure.to_string(), "failure");
	}
}
