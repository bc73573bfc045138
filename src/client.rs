//! Kakao operation client.
//!
//! [`KakaoClient`] owns one credential tuple, the endpoint bases, a shared transport, and a
//! transport error mapper. Every operation resolves its credentials (per-call override, then
//! client default), builds exactly one request, and classifies the response by status class.
//! The client holds no mutable state, so one instance serves any number of concurrent calls.

pub mod authorize;
pub mod session;
pub mod token;
pub mod user;

mod dispatch;

pub use authorize::*;
pub use dispatch::{FORM_CONTENT_TYPE, TransportErrorMapper};
#[cfg(feature = "reqwest")] pub use dispatch::ReqwestTransportErrorMapper;
pub use token::*;
pub use user::*;

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::Credentials,
	endpoint::ProviderEndpoints,
	error::PreconditionError,
	http::{ApiHttpClient, AsyncHttpClient},
	obs::{self, Operation, OperationSpan, Outcome},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;
use dispatch::ApiRequest;

/// Client specialized for the crate's default reqwest transport stack.
#[cfg(feature = "reqwest")]
pub type ReqwestKakaoClient = KakaoClient<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Typed client for the Kakao authorization and user management endpoints.
pub struct KakaoClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	credentials: Credentials,
	endpoints: ProviderEndpoints,
	http_client: Arc<C>,
	transport_mapper: Arc<M>,
}
impl<C, M> KakaoClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a client that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(
		credentials: Credentials,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Self {
		Self {
			credentials,
			endpoints: ProviderEndpoints::default(),
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
		}
	}

	/// Points the client at different base URLs.
	pub fn with_endpoints(mut self, endpoints: ProviderEndpoints) -> Self {
		self.endpoints = endpoints;

		self
	}

	/// Default credentials used when a call supplies no override.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Endpoint bases the client resolves URLs against.
	pub fn endpoints(&self) -> &ProviderEndpoints {
		&self.endpoints
	}

	async fn observe<T, F>(&self, operation: Operation, fut: F) -> Result<T>
	where
		F: Future<Output = Result<T>>,
	{
		let span = OperationSpan::new(operation, &self.credentials.client_id);

		obs::record_outcome(operation, Outcome::Attempt);

		let result = span.instrument(fut).await;

		match &result {
			Ok(_) => obs::record_outcome(operation, Outcome::Success),
			Err(_) => obs::record_outcome(operation, Outcome::Failure),
		}

		result
	}

	async fn execute<T>(&self, request: ApiRequest) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let operation = request.operation;
		let request = request.into_http()?;
		let handle = self.http_client.handle();
		let response = handle
			.call(request)
			.await
			.map_err(|err| self.transport_mapper.map_transport_error(operation, err))?;

		dispatch::decode_response(operation, response)
	}
}
#[cfg(feature = "reqwest")]
impl KakaoClient<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(credentials: Credentials) -> Self {
		Self::with_http_client(credentials, ReqwestHttpClient::default(), ReqwestTransportErrorMapper)
	}
}
impl<C, M> Debug for KakaoClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("KakaoClient")
			.field("credentials", &self.credentials)
			.field("endpoints", &self.endpoints)
			.finish()
	}
}

fn require_access_token(
	access_token: &str,
	operation: Operation,
) -> Result<&str, PreconditionError> {
	if access_token.is_empty() {
		Err(PreconditionError::MissingAccessToken { operation })
	} else {
		Ok(access_token)
	}
}
