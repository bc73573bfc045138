//! Token endpoint response and identity token claims.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserializer, de::Error as _};
// self
use crate::{_prelude::*, auth::Secret};

/// Successful response from the token endpoint (code exchange and refresh).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
	/// Token type, always `bearer`.
	pub token_type: String,
	/// User access token.
	pub access_token: Secret,
	/// Access token lifetime in seconds.
	pub expires_in: i64,
	/// Refresh token.
	pub refresh_token: Secret,
	/// Refresh token lifetime in seconds.
	pub refresh_token_expires_in: i64,
	/// Space-separated consented scopes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
	/// OpenID Connect identity token claims, when `openid` was requested.
	#[serde(
		default,
		deserialize_with = "deserialize_id_token",
		skip_serializing_if = "Option::is_none"
	)]
	pub id_token: Option<IdTokenClaims>,
}

/// Claims carried by a Kakao identity token.
///
/// The claims are only decoded; the token's signature is never checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTokenClaims {
	/// `iss`: issuer, `https://kauth.kakao.com`.
	#[serde(rename = "iss")]
	pub issuer: String,
	/// `aud`: the app's REST API key.
	#[serde(rename = "aud")]
	pub audience: String,
	/// `sub`: the user's id as a string.
	#[serde(rename = "sub")]
	pub subject: String,
	/// `iat`: issue time, Unix seconds.
	#[serde(rename = "iat")]
	pub issued_at: i64,
	/// `exp`: expiry time, Unix seconds.
	#[serde(rename = "exp")]
	pub expires_at: i64,
	/// Time the user authenticated, Unix seconds.
	pub auth_time: i64,
	/// Nonce echoed from the authorization request.
	pub nonce: String,
	/// Profile nickname.
	pub nickname: String,
	/// Profile image URL.
	pub picture: String,
	/// Account email.
	pub email: String,
}
impl IdTokenClaims {
	/// Decodes the payload segment of a compact JWT.
	pub fn from_compact(token: &str) -> Result<Self, IdTokenError> {
		let mut segments = token.split('.');
		let (Some(_header), Some(payload), Some(_signature), None) =
			(segments.next(), segments.next(), segments.next(), segments.next())
		else {
			return Err(IdTokenError::Malformed);
		};
		let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;

		Ok(serde_json::from_slice(&bytes)?)
	}
}

/// Failure to decode a compact identity token.
#[derive(Debug, ThisError)]
pub enum IdTokenError {
	/// The token does not have three dot-separated segments.
	#[error("Identity token is not a three-segment compact JWT.")]
	Malformed,
	/// The payload segment is not base64url.
	#[error("Identity token payload is not valid base64url.")]
	Base64(#[from] base64::DecodeError),
	/// The payload is not a valid claims object.
	#[error("Identity token payload is not a valid claims object.")]
	Claims(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdTokenRepr {
	Claims(IdTokenClaims),
	Compact(String),
}

fn deserialize_id_token<'de, D>(deserializer: D) -> Result<Option<IdTokenClaims>, D::Error>
where
	D: Deserializer<'de>,
{
	match Option::<IdTokenRepr>::deserialize(deserializer)? {
		None => Ok(None),
		Some(IdTokenRepr::Claims(claims)) => Ok(Some(claims)),
		Some(IdTokenRepr::Compact(raw)) =>
			IdTokenClaims::from_compact(&raw).map(Some).map_err(D::Error::custom),
	}
}
