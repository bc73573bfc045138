//! User profile schema with consent-gated account fields.

// self
use crate::{_prelude::*, model::Consent};

/// Profile returned by the single and bulk user info endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
	/// Kakao user id.
	pub id: i64,
	/// Whether the user completed app sign-up (auto-connect disabled apps only).
	#[serde(default)]
	pub has_signed_up: Option<bool>,
	/// Time the user connected to the app.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub connected_at: Option<OffsetDateTime>,
	/// Time the user was synced through Kakao Sync sign-up.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub synched_at: Option<OffsetDateTime>,
	/// App-defined user properties.
	#[serde(default)]
	pub properties: Option<HashMap<String, serde_json::Value>>,
	/// Kakao account fields, each gated by user consent.
	#[serde(default)]
	pub kakao_account: Option<KakaoAccount>,
}

/// Kakao account fields.
///
/// Every field `x` is paired with `x_needs_agreement`; the `*_consent` accessors fold each
/// pair into a [`Consent`].
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KakaoAccount {
	pub profile_needs_agreement: Option<bool>,
	pub profile_nickname_needs_agreement: Option<bool>,
	pub profile_image_needs_agreement: Option<bool>,
	pub profile: Option<Profile>,
	pub name_needs_agreement: Option<bool>,
	pub name: Option<String>,
	pub email_needs_agreement: Option<bool>,
	pub is_email_valid: Option<bool>,
	pub is_email_verified: Option<bool>,
	pub email: Option<String>,
	pub age_range_needs_agreement: Option<bool>,
	pub age_range: Option<AgeRange>,
	pub birthyear_needs_agreement: Option<bool>,
	pub birthyear: Option<String>,
	pub birthday_needs_agreement: Option<bool>,
	/// `MMDD`.
	pub birthday: Option<String>,
	pub birthday_type: Option<BirthdayType>,
	pub gender_needs_agreement: Option<bool>,
	pub gender: Option<Gender>,
	pub phone_number_needs_agreement: Option<bool>,
	pub phone_number: Option<String>,
	#[serde(alias = "ci_needs_aggreement")]
	pub ci_needs_agreement: Option<bool>,
	pub ci: Option<String>,
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub ci_authenticated_at: Option<OffsetDateTime>,
}
impl KakaoAccount {
	/// Profile consent state.
	pub fn profile_consent(&self) -> Consent<&Profile> {
		Consent::from_pair(self.profile.as_ref(), self.profile_needs_agreement)
	}

	/// Name consent state.
	pub fn name_consent(&self) -> Consent<&str> {
		Consent::from_pair(self.name.as_deref(), self.name_needs_agreement)
	}

	/// Email consent state.
	pub fn email_consent(&self) -> Consent<&str> {
		Consent::from_pair(self.email.as_deref(), self.email_needs_agreement)
	}

	/// Age range consent state.
	pub fn age_range_consent(&self) -> Consent<AgeRange> {
		Consent::from_pair(self.age_range, self.age_range_needs_agreement)
	}

	/// Birth year consent state.
	pub fn birthyear_consent(&self) -> Consent<&str> {
		Consent::from_pair(self.birthyear.as_deref(), self.birthyear_needs_agreement)
	}

	/// Birthday consent state.
	pub fn birthday_consent(&self) -> Consent<&str> {
		Consent::from_pair(self.birthday.as_deref(), self.birthday_needs_agreement)
	}

	/// Gender consent state.
	pub fn gender_consent(&self) -> Consent<Gender> {
		Consent::from_pair(self.gender, self.gender_needs_agreement)
	}

	/// Phone number consent state.
	pub fn phone_number_consent(&self) -> Consent<&str> {
		Consent::from_pair(self.phone_number.as_deref(), self.phone_number_needs_agreement)
	}

	/// CI consent state.
	pub fn ci_consent(&self) -> Consent<&str> {
		Consent::from_pair(self.ci.as_deref(), self.ci_needs_agreement)
	}

	/// Usable email: present, valid, and verified.
	pub fn verified_email(&self) -> Option<&str> {
		match (self.is_email_valid, self.is_email_verified) {
			(Some(true), Some(true)) => self.email.as_deref(),
			_ => None,
		}
	}
}

/// Kakao profile sub-record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
	/// Nickname.
	pub nickname: Option<String>,
	/// 110x110 thumbnail URL.
	pub thumbnail_image_url: Option<String>,
	/// 640x640 profile image URL.
	pub profile_image_url: Option<String>,
	/// Whether the image is Kakao's default.
	pub is_default_image: Option<bool>,
	/// Whether the nickname is Kakao's default.
	pub is_default_nickname: Option<bool>,
}

/// Calendar a birthday is expressed in.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BirthdayType {
	Solar,
	Lunar,
}

/// Gender.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	Female,
	Male,
}

/// Age bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeRange {
	/// `1~9`
	#[serde(rename = "1~9")]
	From1To9,
	/// `10~14`
	#[serde(rename = "10~14")]
	From10To14,
	/// `15~19`
	#[serde(rename = "15~19")]
	From15To19,
	/// `20~29`
	#[serde(rename = "20~29")]
	From20To29,
	/// `30~39`
	#[serde(rename = "30~39")]
	From30To39,
	/// `40~49`
	#[serde(rename = "40~49")]
	From40To49,
	/// `50~59`
	#[serde(rename = "50~59")]
	From50To59,
	/// `60~69`
	#[serde(rename = "60~69")]
	From60To69,
	/// `70~79`
	#[serde(rename = "70~79")]
	From70To79,
	/// `80~89`
	#[serde(rename = "80~89")]
	From80To89,
	/// `90~`
	#[serde(rename = "90~")]
	From90,
}
impl AgeRange {
	/// Returns the wire literal.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::From1To9 => "1~9",
			Self::From10To14 => "10~14",
			Self::From15To19 => "15~19",
			Self::From20To29 => "20~29",
			Self::From30To39 => "30~39",
			Self::From40To49 => "40~49",
			Self::From50To59 => "50~59",
			Self::From60To69 => "60~69",
			Self::From70To79 => "70~79",
			Self::From80To89 => "80~89",
			Self::From90 => "90~",
		}
	}
}
impl Display for AgeRange {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
