//! Crate-level error types shared by every provider operation.

// self
use crate::{_prelude::*, obs::Operation};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
///
/// A failed operation yields exactly one of these; nothing is retried or partially
/// recovered.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A required credential could not be resolved; no request was sent.
	#[error(transparent)]
	Precondition(#[from] PreconditionError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Kakao answered with a non-2xx status.
	///
	/// Every rejected request maps here regardless of the status code. Inspect `status` and
	/// `detail` to tell an expired token from a throttled app.
	#[error("Kakao rejected the {operation} request with HTTP {status}.")]
	BadRequest {
		/// Operation that was rejected.
		operation: Operation,
		/// HTTP status code returned by Kakao.
		status: u16,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
		/// Parsed provider error body, when the response carried one.
		detail: Option<ProviderErrorBody>,
	},
	/// A successful response body did not match the expected schema.
	#[error("The {operation} response does not match the expected schema.")]
	Decode {
		/// Operation whose response failed to decode.
		operation: Operation,
		/// HTTP status code of the undecodable response.
		status: u16,
		/// Structured parsing failure including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl Error {
	/// HTTP status attached to the failure, if a response was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::BadRequest { status, .. } | Self::Decode { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Provider error body attached to a [`Error::BadRequest`], if it parsed.
	pub fn provider_detail(&self) -> Option<&ProviderErrorBody> {
		match self {
			Self::BadRequest { detail, .. } => detail.as_ref(),
			_ => None,
		}
	}
}

/// Missing-credential failures raised before any network attempt.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum PreconditionError {
	/// Neither the call nor the client supplied a client id (REST API key).
	#[error("A client id is required for the {operation} request.")]
	MissingClientId {
		/// Operation that required the credential.
		operation: Operation,
	},
	/// Neither the call nor the client supplied a redirect URI.
	#[error("A redirect URI is required for the {operation} request.")]
	MissingRedirectUri {
		/// Operation that required the credential.
		operation: Operation,
	},
	/// Neither the call nor the client supplied an admin key.
	#[error("An admin key is required for the {operation} request.")]
	MissingAdminKey {
		/// Operation that required the credential.
		operation: Operation,
	},
	/// The caller passed an empty access token.
	#[error("An access token is required for the {operation} request.")]
	MissingAccessToken {
		/// Operation that required the credential.
		operation: Operation,
	},
}
impl PreconditionError {
	/// Operation that failed the precondition.
	pub fn operation(&self) -> Operation {
		match self {
			Self::MissingClientId { operation }
			| Self::MissingRedirectUri { operation }
			| Self::MissingAdminKey { operation }
			| Self::MissingAccessToken { operation } => *operation,
		}
	}
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// An endpoint base URL is invalid.
	#[error("The {endpoint} base URL is invalid.")]
	InvalidEndpoint {
		/// Which base URL failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A JSON-encoded query parameter could not be serialized.
	#[error("The `{name}` parameter could not be encoded as JSON.")]
	ParameterEncoding {
		/// Parameter name.
		name: &'static str,
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling Kakao.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The request exceeded the transport's configured timeout.
	#[error("Request to Kakao timed out.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling Kakao.")]
	Io(#[from] std::io::Error),
	/// Transport failure reported only as a message.
	#[error("HTTP client error occurred while calling Kakao: {message}.")]
	Other {
		/// Transport-supplied description.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Wraps a transport-specific timeout error.
	pub fn timeout(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Timeout { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Error payload returned by Kakao alongside a non-2xx status.
///
/// The resource server answers with `{"msg", "code"}` while the authorization server uses
/// the OAuth shape `{"error", "error_description", "error_code"}`; both are captured here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderErrorBody {
	/// Resource-server message.
	pub msg: Option<String>,
	/// Resource-server error code (negative integers such as `-401`).
	pub code: Option<i64>,
	/// OAuth error identifier.
	pub error: Option<String>,
	/// OAuth error description.
	pub error_description: Option<String>,
	/// Kakao OAuth error code (`KOE…`).
	pub error_code: Option<String>,
}
impl ProviderErrorBody {
	/// Parses a provider error body; returns `None` when the body carries no known field.
	pub fn parse(body: &[u8]) -> Option<Self> {
		let parsed = serde_json::from_slice::<Self>(body).ok()?;

		if parsed == Self::default() { None } else { Some(parsed) }
	}

	/// Human-readable message, preferring the OAuth description.
	pub fn message(&self) -> Option<&str> {
		self.error_description.as_deref().or(self.msg.as_deref())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn provider_error_body_parses_both_shapes() {
		let api = ProviderErrorBody::parse(br#"{"msg":"this access token does not exist","code":-401}"#)
			.expect("Resource-server error body should parse.");

		assert_eq!(api.code, Some(-401));
		assert_eq!(api.message(), Some("this access token does not exist"));

		let oauth = ProviderErrorBody::parse(
			br#"{"error":"invalid_grant","error_description":"authorization code not found","error_code":"KOE320"}"#,
		)
		.expect("OAuth error body should parse.");

		assert_eq!(oauth.error.as_deref(), Some("invalid_grant"));
		assert_eq!(oauth.error_code.as_deref(), Some("KOE320"));
		assert_eq!(oauth.message(), Some("authorization code not found"));
	}

	#[test]
	fn provider_error_body_ignores_unrelated_payloads() {
		assert!(ProviderErrorBody::parse(b"<html>bad gateway</html>").is_none());
		assert!(ProviderErrorBody::parse(br#"{"unexpected":true}"#).is_none());
	}

	#[test]
	fn bad_request_exposes_status_and_detail() {
		let err = Error::BadRequest {
			operation: Operation::UserList,
			status: 429,
			retry_after: Some(Duration::seconds(3)),
			detail: ProviderErrorBody::parse(br#"{"msg":"API limit exceeded","code":-10}"#),
		};

		assert_eq!(err.status(), Some(429));
		assert_eq!(err.provider_detail().and_then(|body| body.code), Some(-10));
		assert_eq!(err.to_string(), "Kakao rejected the user_list request with HTTP 429.");
	}

	#[test]
	fn precondition_errors_report_operation() {
		let err = PreconditionError::MissingAdminKey { operation: Operation::UsersInfo };

		assert_eq!(err.operation(), Operation::UsersInfo);
		assert_eq!(err.to_string(), "An admin key is required for the users_info request.");

		let wrapped: Error = err.into();

		assert!(wrapped.status().is_none());
	}
}
