//! Token endpoint grants: authorization code exchange and refresh.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	auth::Secret,
	client::{ApiRequest, KakaoClient, TransportErrorMapper},
	endpoint::AuthEndpoint,
	http::ApiHttpClient,
	model::TokenResponse,
	obs::Operation,
};

/// Input for [`KakaoClient::exchange_code`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeExchange {
	/// Authorization code delivered to the redirect URI.
	pub code: String,
	/// Overrides the client id for this call.
	pub client_id: Option<String>,
	/// Overrides the redirect URI; must equal the one used for the authorization URL.
	pub redirect_uri: Option<String>,
	/// Overrides the client secret for this call.
	pub client_secret: Option<Secret>,
}
impl CodeExchange {
	/// Creates an exchange for `code` using the client's default credentials.
	pub fn new(code: impl Into<String>) -> Self {
		Self { code: code.into(), client_id: None, redirect_uri: None, client_secret: None }
	}

	/// Overrides the client id.
	pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = Some(client_id.into());

		self
	}

	/// Overrides the redirect URI.
	pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = Some(redirect_uri.into());

		self
	}

	/// Overrides the client secret.
	pub fn with_client_secret(mut self, client_secret: impl Into<Secret>) -> Self {
		self.client_secret = Some(client_secret.into());

		self
	}
}

/// Input for [`KakaoClient::refresh_token`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenRefresh {
	/// Refresh token issued by a previous grant.
	pub refresh_token: Secret,
	/// Overrides the client id for this call.
	pub client_id: Option<String>,
	/// Overrides the client secret for this call.
	pub client_secret: Option<Secret>,
}
impl TokenRefresh {
	/// Creates a refresh request using the client's default credentials.
	pub fn new(refresh_token: impl Into<Secret>) -> Self {
		Self { refresh_token: refresh_token.into(), client_id: None, client_secret: None }
	}

	/// Overrides the client id.
	pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = Some(client_id.into());

		self
	}

	/// Overrides the client secret.
	pub fn with_client_secret(mut self, client_secret: impl Into<Secret>) -> Self {
		self.client_secret = Some(client_secret.into());

		self
	}
}

impl<C, M> KakaoClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Exchanges an authorization code for user tokens.
	pub async fn exchange_code(&self, request: CodeExchange) -> Result<TokenResponse> {
		const OPERATION: Operation = Operation::ExchangeCode;

		self.observe(OPERATION, async {
			let client_id =
				self.credentials.resolve_client_id(request.client_id.as_deref(), OPERATION)?;
			let redirect_uri =
				self.credentials.resolve_redirect_uri(request.redirect_uri.as_deref(), OPERATION)?;
			let client_secret = self.credentials.resolve_client_secret(request.client_secret.as_ref());
			let mut api =
				ApiRequest::new(OPERATION, Method::POST, self.endpoints.auth(AuthEndpoint::Token)?)
					.form("grant_type", "authorization_code")
					.form("client_id", client_id)
					.form("redirect_uri", redirect_uri)
					.form("code", request.code.as_str());

			if let Some(secret) = client_secret {
				api = api.form("client_secret", secret.expose());
			}

			self.execute(api).await
		})
		.await
	}

	/// Obtains a new access token with a refresh token.
	///
	/// Kakao rotates the refresh token only near its expiry; the response always carries the
	/// token the caller should keep.
	pub async fn refresh_token(&self, request: TokenRefresh) -> Result<TokenResponse> {
		const OPERATION: Operation = Operation::RefreshToken;

		self.observe(OPERATION, async {
			let client_id =
				self.credentials.resolve_client_id(request.client_id.as_deref(), OPERATION)?;
			let client_secret = self.credentials.resolve_client_secret(request.client_secret.as_ref());
			let mut api =
				ApiRequest::new(OPERATION, Method::POST, self.endpoints.auth(AuthEndpoint::Token)?)
					.form("grant_type", "refresh_token")
					.form("client_id", client_id)
					.form("refresh_token", request.refresh_token.expose());

			if let Some(secret) = client_secret {
				api = api.form("client_secret", secret.expose());
			}

			self.execute(api).await
		})
		.await
	}
}
