//! Request construction, transport error mapping, and response classification.

// crates.io
use oauth2::http::{
	Method, Request,
	header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::Secret,
	error::{ConfigError, ProviderErrorBody, TransportError},
	http::{HttpClientError, HttpRequest, HttpResponse, parse_retry_after},
	obs::Operation,
};

/// Content type attached to every outbound request.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";

/// Maps HTTP transport failures into crate [`Error`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an [`HttpClientError`] emitted by the transport into a crate error.
	fn map_transport_error(&self, operation: Operation, error: HttpClientError<E>) -> Error;
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(&self, operation: Operation, err: HttpClientError<ReqwestError>) -> Error {
		match err {
			HttpClientError::Reqwest(inner) => map_reqwest_error(*inner),
			HttpClientError::Http(inner) => ConfigError::from(inner).into(),
			HttpClientError::Io(inner) => TransportError::Io(inner).into(),
			HttpClientError::Other(message) => TransportError::Other { message }.into(),
			_ => TransportError::Other {
				message: format!("unrecognized failure during {operation}"),
			}
			.into(),
		}
	}
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::from(err).into();
	}
	if err.is_timeout() {
		return TransportError::timeout(err).into();
	}

	TransportError::from(err).into()
}

/// One outbound Kakao call before it is handed to the transport.
pub(crate) struct ApiRequest {
	pub(crate) operation: Operation,
	method: Method,
	url: Url,
	authorization: Option<String>,
	form: Vec<(&'static str, String)>,
}
impl ApiRequest {
	pub(crate) fn new(operation: Operation, method: Method, url: Url) -> Self {
		Self { operation, method, url, authorization: None, form: Vec::new() }
	}

	/// `Authorization: Bearer {token}`.
	pub(crate) fn bearer(mut self, access_token: &str) -> Self {
		self.authorization = Some(format!("Bearer {access_token}"));

		self
	}

	/// `Authorization: KakaoAK {key}`.
	pub(crate) fn admin_key(mut self, admin_key: &Secret) -> Self {
		self.authorization = Some(format!("KakaoAK {}", admin_key.expose()));

		self
	}

	pub(crate) fn query(mut self, name: &str, value: &str) -> Self {
		self.url.query_pairs_mut().append_pair(name, value);

		self
	}

	pub(crate) fn form(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.form.push((name, value.into()));

		self
	}

	#[cfg(test)]
	pub(crate) fn url(&self) -> &Url {
		&self.url
	}

	pub(crate) fn into_http(self) -> Result<HttpRequest, ConfigError> {
		let body = if self.form.is_empty() {
			Vec::new()
		} else {
			let mut serializer = url::form_urlencoded::Serializer::new(String::new());

			for (name, value) in &self.form {
				serializer.append_pair(name, value);
			}

			serializer.finish().into_bytes()
		};
		let mut builder = Request::builder()
			.method(self.method)
			.uri(self.url.as_str())
			.header(CONTENT_TYPE, FORM_CONTENT_TYPE);

		if let Some(authorization) = self.authorization {
			builder = builder.header(AUTHORIZATION, authorization);
		}

		Ok(builder.body(body)?)
	}
}

/// Classifies a response by status class and decodes a success body.
pub(crate) fn decode_response<T>(operation: Operation, response: HttpResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	let status = response.status();

	if !status.is_success() {
		return Err(Error::BadRequest {
			operation,
			status: status.as_u16(),
			retry_after: parse_retry_after(response.headers()),
			detail: ProviderErrorBody::parse(response.body()),
		});
	}

	let mut deserializer = serde_json::Deserializer::from_slice(response.body());

	serde_path_to_error::deserialize(&mut deserializer).map_err(|source| Error::Decode {
		operation,
		status: status.as_u16(),
		source,
	})
}

#[cfg(test)]
mod tests {
	// crates.io
	use oauth2::http::{HeaderValue, StatusCode, header::RETRY_AFTER};
	// self
	use super::*;
	use crate::model::UserIdResponse;

	fn response(status: StatusCode, body: &str) -> HttpResponse {
		let mut response = HttpResponse::new(body.as_bytes().to_vec());

		*response.status_mut() = status;

		response
	}

	#[test]
	fn into_http_encodes_form_and_headers() {
		let url = Url::parse("https://kauth.kakao.com/oauth/token").expect("URL should parse.");
		let request = ApiRequest::new(Operation::ExchangeCode, Method::POST, url)
			.form("grant_type", "authorization_code")
			.form("redirect_uri", "https://app.example/cb?a=b c")
			.into_http()
			.expect("Request should build.");

		assert_eq!(request.method(), Method::POST);
		assert_eq!(request.uri(), "https://kauth.kakao.com/oauth/token");
		assert_eq!(
			request.headers().get(CONTENT_TYPE).and_then(|value| value.to_str().ok()),
			Some(FORM_CONTENT_TYPE)
		);
		assert!(request.headers().get(AUTHORIZATION).is_none());
		assert_eq!(
			String::from_utf8_lossy(request.body()),
			"grant_type=authorization_code&redirect_uri=https%3A%2F%2Fapp.example%2Fcb%3Fa%3Db+c"
		);
	}

	#[test]
	fn authorization_schemes_and_query() {
		let url = Url::parse("https://kapi.kakao.com/v2/user/me").expect("URL should parse.");
		let bearer = ApiRequest::new(Operation::UserInfo, Method::GET, url.clone())
			.bearer("token-1")
			.query("secure_resource", "true");

		assert_eq!(bearer.url().as_str(), "https://kapi.kakao.com/v2/user/me?secure_resource=true");

		let bearer = bearer.into_http().expect("Request should build.");

		assert_eq!(
			bearer.headers().get(AUTHORIZATION),
			Some(&HeaderValue::from_static("Bearer token-1"))
		);
		assert!(bearer.body().is_empty());

		let admin = ApiRequest::new(Operation::UserList, Method::GET, url)
			.admin_key(&Secret::new("admin-1"))
			.into_http()
			.expect("Request should build.");

		assert_eq!(
			admin.headers().get(AUTHORIZATION),
			Some(&HeaderValue::from_static("KakaoAK admin-1"))
		);
	}

	#[test]
	fn header_injection_is_a_config_error() {
		let url = Url::parse("https://kapi.kakao.com/v1/user/logout").expect("URL should parse.");
		let err = ApiRequest::new(Operation::Logout, Method::POST, url)
			.bearer("bad\ntoken")
			.into_http()
			.expect_err("Newlines must not reach a header.");

		assert!(matches!(err, ConfigError::HttpRequest(_)));
	}

	#[test]
	fn non_success_status_is_bad_request() {
		let mut rejected = response(
			StatusCode::TOO_MANY_REQUESTS,
			r#"{"msg":"API limit has been exceeded.","code":-10}"#,
		);

		rejected.headers_mut().insert(RETRY_AFTER, HeaderValue::from_static("7"));

		let err = decode_response::<UserIdResponse>(Operation::Unlink, rejected)
			.expect_err("429 should fail.");

		match err {
			Error::BadRequest { operation, status, retry_after, detail } => {
				assert_eq!(operation, Operation::Unlink);
				assert_eq!(status, 429);
				assert_eq!(retry_after, Some(Duration::seconds(7)));
				assert_eq!(detail.and_then(|body| body.code), Some(-10));
			},
			other => panic!("Unexpected error: {other:?}."),
		}

		let err = decode_response::<UserIdResponse>(
			Operation::Logout,
			response(StatusCode::BAD_GATEWAY, "<html></html>"),
		)
		.expect_err("502 should fail.");

		assert!(matches!(err, Error::BadRequest { status: 502, detail: None, .. }));
	}

	#[test]
	fn decode_failures_carry_json_path() {
		let err = decode_response::<UserIdResponse>(
			Operation::Logout,
			response(StatusCode::OK, r#"{"id":"not-a-number"}"#),
		)
		.expect_err("A string id should fail to decode.");

		match err {
			Error::Decode { operation, status, source } => {
				assert_eq!(operation, Operation::Logout);
				assert_eq!(status, 200);
				assert_eq!(source.path().to_string(), "id");
			},
			other => panic!("Unexpected error: {other:?}."),
		}

		let ok = decode_response::<UserIdResponse>(
			Operation::Logout,
			response(StatusCode::OK, r#"{"id":42}"#),
		)
		.expect("Valid body should decode.");

		assert_eq!(ok.id, 42);
	}
}
