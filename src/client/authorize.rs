//! Authorization URL construction.

// self
use crate::{
	_prelude::*,
	client::{KakaoClient, TransportErrorMapper},
	endpoint::AuthEndpoint,
	http::ApiHttpClient,
	obs::{self, Operation, OperationSpan, Outcome},
};

/// Parameters for the authorization code request page.
///
/// Every field is optional. `client_id` and `redirect_uri` fall back to the client's
/// credentials; the remaining fields are appended only when non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizeRequest {
	/// Overrides the client id for this URL.
	pub client_id: Option<String>,
	/// Overrides the redirect URI for this URL.
	pub redirect_uri: Option<String>,
	/// Opaque CSRF value echoed back on the redirect.
	pub state: Option<String>,
	/// Comma-separated consent items for additional consent.
	pub scope: Option<String>,
	/// `login`, `none`, `create`, or `select_account`.
	pub prompt: Option<String>,
	/// Pre-filled account identifier.
	pub login_hint: Option<String>,
	/// Service terms tags to present.
	pub service_terms: Option<String>,
	/// OpenID Connect nonce.
	pub nonce: Option<String>,
}
impl AuthorizeRequest {
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

	/// Sets the `state` value.
	pub fn with_state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into());

		self
	}

	/// Sets the `scope` value.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Sets the `prompt` value.
	pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.prompt = Some(prompt.into());

		self
	}

	/// Sets the `login_hint` value.
	pub fn with_login_hint(mut self, login_hint: impl Into<String>) -> Self {
		self.login_hint = Some(login_hint.into());

		self
	}

	/// Sets the `service_terms` value.
	pub fn with_service_terms(mut self, service_terms: impl Into<String>) -> Self {
		self.service_terms = Some(service_terms.into());

		self
	}

	/// Sets the `nonce` value.
	pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
		self.nonce = Some(nonce.into());

		self
	}
}

impl<C, M> KakaoClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Builds the URL the user agent should be redirected to.
	///
	/// Performs no I/O. Fails only when the client id or redirect URI cannot be resolved.
	pub fn authorization_url(&self, request: &AuthorizeRequest) -> Result<Url> {
		const OPERATION: Operation = Operation::AuthorizationUrl;

		let _guard = OperationSpan::new(OPERATION, &self.credentials.client_id).entered();

		obs::record_outcome(OPERATION, Outcome::Attempt);

		let result = self.resolve_authorize_url(request);

		match &result {
			Ok(_) => obs::record_outcome(OPERATION, Outcome::Success),
			Err(_) => obs::record_outcome(OPERATION, Outcome::Failure),
		}

		result
	}

	fn resolve_authorize_url(&self, request: &AuthorizeRequest) -> Result<Url> {
		const OPERATION: Operation = Operation::AuthorizationUrl;

		let client_id = self.credentials.resolve_client_id(request.client_id.as_deref(), OPERATION)?;
		let redirect_uri =
			self.credentials.resolve_redirect_uri(request.redirect_uri.as_deref(), OPERATION)?;

		Ok(build_authorize_url(
			self.endpoints.auth(AuthEndpoint::Authorize)?,
			client_id,
			redirect_uri,
			request,
		))
	}
}

/// Appends the authorization query to `base` in the order Kakao documents.
pub(crate) fn build_authorize_url(
	mut base: Url,
	client_id: &str,
	redirect_uri: &str,
	request: &AuthorizeRequest,
) -> Url {
	{
		let mut query = base.query_pairs_mut();

		query
			.append_pair("response_type", "code")
			.append_pair("client_id", client_id)
			.append_pair("redirect_uri", redirect_uri);

		for (name, value) in [
			("state", &request.state),
			("scope", &request.scope),
			("prompt", &request.prompt),
			("login_hint", &request.login_hint),
			("service_terms", &request.service_terms),
			("nonce", &request.nonce),
		] {
			if let Some(value) = value.as_deref().filter(|value| !value.is_empty()) {
				query.append_pair(name, value);
			}
		}
	}

	base
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn base() -> Url {
		Url::parse(AuthEndpoint::Authorize.default_url()).expect("Authorize URL should parse.")
	}

	#[test]
	fn minimal_url_carries_required_parameters_only() {
		let url = build_authorize_url(
			base(),
			"rest-key",
			"https://app.example/oauth/callback",
			&AuthorizeRequest::default(),
		);

		assert_eq!(
			url.as_str(),
			"https://kauth.kakao.com/oauth/authorize?response_type=code&client_id=rest-key&redirect_uri=https%3A%2F%2Fapp.example%2Foauth%2Fcallback"
		);
	}

	#[test]
	fn optional_parameters_follow_fixed_order_and_skip_empty() {
		let request = AuthorizeRequest::default()
			.with_nonce("n 1")
			.with_prompt("")
			.with_scope("account_email,gender")
			.with_state("xyz")
			.with_service_terms("tag1");
		let url = build_authorize_url(base(), "rest-key", "https://app.example/cb", &request);
		let names = url.query_pairs().map(|(name, _)| name.into_owned()).collect::<Vec<_>>();

		assert_eq!(
			names,
			["response_type", "client_id", "redirect_uri", "state", "scope", "service_terms", "nonce"]
		);
		assert!(url.as_str().ends_with("&scope=account_email%2Cgender&service_terms=tag1&nonce=n+1"));
	}
}
