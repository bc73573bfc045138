//! Consent-gated field view.

/// State of a consent-gated profile field.
///
/// Kakao reports each gated field as a value plus a `<field>_needs_agreement` flag. The
/// four combinations that occur on the wire map onto these variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consent<T> {
	/// The user agreed and Kakao returned the value.
	Granted(T),
	/// The user agreed but Kakao has no value for the field.
	Missing,
	/// The user has not agreed; the value is withheld.
	NotGranted,
	/// Neither value nor flag was returned; the field was not requested.
	NotRequested,
}
impl<T> Consent<T> {
	/// Builds the view from the raw wire pair.
	pub fn from_pair(value: Option<T>, needs_agreement: Option<bool>) -> Self {
		match (value, needs_agreement) {
			(Some(value), _) => Self::Granted(value),
			(None, Some(true)) => Self::NotGranted,
			(None, Some(false)) => Self::Missing,
			(None, None) => Self::NotRequested,
		}
	}

	/// Returns the value if consent was granted and the value is present.
	pub fn granted(self) -> Option<T> {
		match self {
			Self::Granted(value) => Some(value),
			_ => None,
		}
	}

	/// Whether the value is present.
	pub fn is_granted(&self) -> bool {
		matches!(self, Self::Granted(_))
	}

	/// Whether asking the user for additional consent would unlock the field.
	pub fn needs_agreement(&self) -> bool {
		matches!(self, Self::NotGranted)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn wire_pairs_map_to_distinct_states() {
		assert_eq!(Consent::from_pair(Some("a@b.c"), Some(false)), Consent::Granted("a@b.c"));
		assert_eq!(Consent::from_pair(Some("a@b.c"), None), Consent::Granted("a@b.c"));
		assert_eq!(Consent::<&str>::from_pair(None, Some(false)), Consent::Missing);
		assert_eq!(Consent::<&str>::from_pair(None, Some(true)), Consent::NotGranted);
		assert_eq!(Consent::<&str>::from_pair(None, None), Consent::NotRequested);
	}

	#[test]
	fn helpers_report_state() {
		assert_eq!(Consent::Granted(7).granted(), Some(7));
		assert!(Consent::<u8>::NotGranted.needs_agreement());
		assert!(!Consent::<u8>::Missing.is_granted());
		assert_eq!(Consent::<u8>::NotRequested.granted(), None);
	}
}
