//! Property keys selecting which consent-gated fields a request asks for.

// self
use crate::{_prelude::*, error::ConfigError};

/// Dotted key path sent in the JSON-encoded `property_keys` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKey {
	/// `kakao_account.profile`
	#[serde(rename = "kakao_account.profile")]
	Profile,
	/// `kakao_account.name`
	#[serde(rename = "kakao_account.name")]
	Name,
	/// `kakao_account.email`
	#[serde(rename = "kakao_account.email")]
	Email,
	/// `kakao_account.age_range`
	#[serde(rename = "kakao_account.age_range")]
	AgeRange,
	/// `kakao_account.birthday`
	#[serde(rename = "kakao_account.birthday")]
	Birthday,
	/// `kakao_account.gender`
	#[serde(rename = "kakao_account.gender")]
	Gender,
	/// `kakao_account.` prefix, selecting every account field.
	#[serde(rename = "kakao_account.")]
	KakaoAccount,
	/// `has_signed_up`
	#[serde(rename = "has_signed_up")]
	HasSignedUp,
}
impl PropertyKey {
	/// Keys sent by the bulk lookup when the caller supplies none.
	pub const BULK_DEFAULT: [Self; 2] = [Self::KakaoAccount, Self::HasSignedUp];

	/// Returns the wire form of the key.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Profile => "kakao_account.profile",
			Self::Name => "kakao_account.name",
			Self::Email => "kakao_account.email",
			Self::AgeRange => "kakao_account.age_range",
			Self::Birthday => "kakao_account.birthday",
			Self::Gender => "kakao_account.gender",
			Self::KakaoAccount => "kakao_account.",
			Self::HasSignedUp => "has_signed_up",
		}
	}
}
impl Display for PropertyKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Encodes a value as the JSON text Kakao expects inside a query parameter.
pub(crate) fn encode_json<T>(name: &'static str, value: &T) -> Result<String, ConfigError>
where
	T: ?Sized + Serialize,
{
	serde_json::to_string(value).map_err(|source| ConfigError::ParameterEncoding { name, source })
}
