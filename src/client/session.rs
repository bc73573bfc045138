//! Calls scoped to the user's access token session.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	client::{ApiRequest, KakaoClient, TransportErrorMapper},
	endpoint::ApiEndpoint,
	http::ApiHttpClient,
	model::{AccessTokenInfo, UserIdResponse},
	obs::Operation,
};

impl<C, M> KakaoClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Expires the access and refresh tokens of the session.
	pub async fn logout(&self, access_token: &str) -> Result<UserIdResponse> {
		self.bearer_call(Operation::Logout, Method::POST, ApiEndpoint::Logout, access_token).await
	}

	/// Disconnects the user from the app.
	pub async fn unlink(&self, access_token: &str) -> Result<UserIdResponse> {
		self.bearer_call(Operation::Unlink, Method::POST, ApiEndpoint::Unlink, access_token).await
	}

	/// Reports the owner and remaining lifetime of an access token.
	pub async fn access_token_info(&self, access_token: &str) -> Result<AccessTokenInfo> {
		self.bearer_call(Operation::AccessTokenInfo, Method::GET, ApiEndpoint::TokenInfo, access_token)
			.await
	}

	async fn bearer_call<T>(
		&self,
		operation: Operation,
		method: Method,
		endpoint: ApiEndpoint,
		access_token: &str,
	) -> Result<T>
	where
		T: serde::de::DeserializeOwned,
	{
		self.observe(operation, async {
			let access_token = super::require_access_token(access_token, operation)?;
			let api = ApiRequest::new(operation, method, self.endpoints.api(endpoint)?)
				.bearer(access_token);

			self.execute(api).await
		})
		.await
	}
}
