//! Credential tuple owned by each client and the override-or-default resolution rules.
//!
//! Every operation resolves each credential it needs as: the explicit per-call value, else
//! the client's configured default, else unset. Empty strings count as unset. Required
//! credentials that stay unset fail with a [`PreconditionError`] before any request is
//! built, and an override never outlives the call that supplied it.

// self
use crate::{_prelude::*, auth::Secret, error::PreconditionError, obs::Operation};

/// App credentials identifying a client instance.
///
/// Two values compare equal when all four fields match, which is what
/// [`ClientRegistry`](crate::ClientRegistry) keys its cache on.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credentials {
	/// REST API key (OAuth client id).
	pub client_id: String,
	/// Admin key authorizing app-level user management calls.
	pub admin_key: Option<Secret>,
	/// Redirect URI registered for the app; sent verbatim.
	pub redirect_uri: Option<String>,
	/// Client secret, when the app has it enabled.
	pub client_secret: Option<Secret>,
}
impl Credentials {
	/// Creates credentials carrying only the client id.
	pub fn new(client_id: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), admin_key: None, redirect_uri: None, client_secret: None }
	}

	/// Sets the default admin key.
	pub fn with_admin_key(mut self, admin_key: impl Into<Secret>) -> Self {
		self.admin_key = Some(admin_key.into());

		self
	}

	/// Sets the default redirect URI.
	pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = Some(redirect_uri.into());

		self
	}

	/// Sets the default client secret.
	pub fn with_client_secret(mut self, client_secret: impl Into<Secret>) -> Self {
		self.client_secret = Some(client_secret.into());

		self
	}

	/// Resolves the client id, failing when neither the override nor the default is set.
	pub fn resolve_client_id<'a>(
		&'a self,
		override_value: Option<&'a str>,
		operation: Operation,
	) -> Result<&'a str, PreconditionError> {
		pick(override_value, Some(self.client_id.as_str()))
			.ok_or(PreconditionError::MissingClientId { operation })
	}

	/// Resolves the redirect URI, failing when neither the override nor the default is set.
	pub fn resolve_redirect_uri<'a>(
		&'a self,
		override_value: Option<&'a str>,
		operation: Operation,
	) -> Result<&'a str, PreconditionError> {
		pick(override_value, self.redirect_uri.as_deref())
			.ok_or(PreconditionError::MissingRedirectUri { operation })
	}

	/// Resolves the admin key, failing when neither the override nor the default is set.
	pub fn resolve_admin_key<'a>(
		&'a self,
		override_value: Option<&'a Secret>,
		operation: Operation,
	) -> Result<&'a Secret, PreconditionError> {
		pick_secret(override_value, self.admin_key.as_ref())
			.ok_or(PreconditionError::MissingAdminKey { operation })
	}

	/// Resolves the optional client secret.
	pub fn resolve_client_secret<'a>(
		&'a self,
		override_value: Option<&'a Secret>,
	) -> Option<&'a Secret> {
		pick_secret(override_value, self.client_secret.as_ref())
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("client_id", &self.client_id)
			.field("redirect_uri", &self.redirect_uri)
			.field("admin_key_set", &self.admin_key.is_some())
			.field("client_secret_set", &self.client_secret.is_some())
			.finish()
	}
}

fn pick<'a>(override_value: Option<&'a str>, default: Option<&'a str>) -> Option<&'a str> {
	override_value.filter(|value| !value.is_empty()).or(default.filter(|value| !value.is_empty()))
}

fn pick_secret<'a>(
	override_value: Option<&'a Secret>,
	default: Option<&'a Secret>,
) -> Option<&'a Secret> {
	override_value.filter(|value| !value.is_empty()).or(default.filter(|value| !value.is_empty()))
}
