//! Kakao endpoint registry.
//!
//! [`AuthEndpoint`] covers the authorization server (`kauth.kakao.com`) and [`ApiEndpoint`]
//! the resource server (`kapi.kakao.com`). Each variant knows its path and its absolute
//! production URL. [`ProviderEndpoints`] resolves them against configurable base URLs so the
//! client can be pointed at a mock server or an egress proxy.

// std
use std::borrow::Cow;
// self
use crate::{_prelude::*, error::ConfigError};

macro_rules! def_endpoints {
	(
		$(#[$meta:meta])*
		$name:ident, $base:literal {
			$($(#[$vmeta:meta])* $variant:ident => $path:literal,)+
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
		pub enum $name {
			$($(#[$vmeta])* $variant,)+
		}
		impl $name {
			/// Production base URL for this endpoint group.
			pub const BASE: &'static str = $base;
			/// Every endpoint in the group.
			pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

			/// Path relative to the group's base URL.
			pub const fn path(self) -> &'static str {
				match self {
					$(Self::$variant => $path,)+
				}
			}

			/// Absolute production URL.
			pub const fn default_url(self) -> &'static str {
				match self {
					$(Self::$variant => concat!($base, $path),)+
				}
			}
		}
	};
}

def_endpoints! {
	/// Authorization server endpoints.
	AuthEndpoint, "https://kauth.kakao.com" {
		/// Authorization code request page.
		Authorize => "/oauth/authorize",
		/// Token issuance and refresh.
		Token => "/oauth/token",
		/// Kakao account logout redirect.
		Logout => "/oauth/logout",
	}
}

def_endpoints! {
	/// Resource server endpoints.
	ApiEndpoint, "https://kapi.kakao.com" {
		/// Access token logout.
		Logout => "/v1/user/logout",
		/// App disconnection.
		Unlink => "/v1/user/unlink",
		/// Access token introspection.
		TokenInfo => "/v1/user/access_token_info",
		/// Single user profile.
		UserInfo => "/v2/user/me",
		/// Bulk user profiles (admin).
		UsersInfo => "/v2/app/users",
		/// App user id listing (admin).
		UserList => "/v1/user/ids",
		/// Consent scope listing.
		Scopes => "/v2/user/scopes",
		/// Consent scope revocation.
		RevokeScopes => "/v2/user/revoke/scopes",
	}
}

/// Base URLs used to resolve [`AuthEndpoint`] and [`ApiEndpoint`] paths.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProviderEndpoints {
	auth_base: Cow<'static, str>,
	api_base: Cow<'static, str>,
}
impl ProviderEndpoints {
	/// Builds an endpoint set from custom base URLs.
	///
	/// Any path on a base is kept as a prefix, so `https://proxy.local/kakao` resolves the
	/// token endpoint to `https://proxy.local/kakao/oauth/token`. Query and fragment are
	/// discarded.
	pub fn new(auth_base: &str, api_base: &str) -> Result<Self, ConfigError> {
		Ok(Self {
			auth_base: Cow::Owned(parse_base("auth", auth_base)?),
			api_base: Cow::Owned(parse_base("api", api_base)?),
		})
	}

	/// Routes both endpoint groups to the same host (handy for mock servers).
	pub fn single_host(base: &str) -> Result<Self, ConfigError> {
		Self::new(base, base)
	}

	/// Authorization server base URL, without a trailing slash.
	pub fn auth_base(&self) -> &str {
		&self.auth_base
	}

	/// Resource server base URL, without a trailing slash.
	pub fn api_base(&self) -> &str {
		&self.api_base
	}

	/// Resolves an authorization server endpoint.
	pub fn auth(&self, endpoint: AuthEndpoint) -> Result<Url, ConfigError> {
		resolve("auth", &self.auth_base, endpoint.path())
	}

	/// Resolves a resource server endpoint.
	pub fn api(&self, endpoint: ApiEndpoint) -> Result<Url, ConfigError> {
		resolve("api", &self.api_base, endpoint.path())
	}
}
impl Default for ProviderEndpoints {
	fn default() -> Self {
		Self {
			auth_base: Cow::Borrowed(AuthEndpoint::BASE),
			api_base: Cow::Borrowed(ApiEndpoint::BASE),
		}
	}
}

fn parse_base(endpoint: &'static str, raw: &str) -> Result<String, ConfigError> {
	let mut url =
		Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint { endpoint, source })?;

	if url.cannot_be_a_base() {
		return Err(ConfigError::InvalidEndpoint {
			endpoint,
			source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
		});
	}

	url.set_query(None);
	url.set_fragment(None);

	Ok(url.as_str().trim_end_matches('/').to_owned())
}

fn resolve(endpoint: &'static str, base: &str, path: &str) -> Result<Url, ConfigError> {
	Url::parse(&format!("{base}{path}"))
		.map_err(|source| ConfigError::InvalidEndpoint { endpoint, source })
}
