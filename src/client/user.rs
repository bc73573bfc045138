//! Profile lookups and app user listing.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	auth::Secret,
	client::{ApiRequest, KakaoClient, TransportErrorMapper},
	endpoint::ApiEndpoint,
	http::ApiHttpClient,
	model::{Order, PropertyKey, UserInfo, UserListResponse, encode_json},
	obs::Operation,
};

/// Options for [`KakaoClient::user_info`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserInfoRequest {
	/// Return image URLs over HTTPS.
	pub secure_resource: bool,
	/// Restricts the response to these keys; `Some` switches the call to POST, even when
	/// the list is empty.
	pub property_keys: Option<Vec<PropertyKey>>,
}
impl UserInfoRequest {
	/// Sets `secure_resource`.
	pub fn with_secure_resource(mut self, secure_resource: bool) -> Self {
		self.secure_resource = secure_resource;

		self
	}

	/// Sets the property keys to request.
	pub fn with_property_keys(mut self, keys: impl IntoIterator<Item = PropertyKey>) -> Self {
		self.property_keys = Some(keys.into_iter().collect());

		self
	}
}

/// Input for [`KakaoClient::user_info_by_admin`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminUserInfoRequest {
	/// User to look up.
	pub target_id: i64,
	/// Overrides the admin key for this call.
	pub admin_key: Option<Secret>,
	/// Return image URLs over HTTPS.
	pub secure_resource: bool,
	/// Restricts the response to these keys; sent only when non-empty.
	pub property_keys: Vec<PropertyKey>,
}
impl AdminUserInfoRequest {
	/// Looks up `target_id` with the client's default admin key.
	pub fn new(target_id: i64) -> Self {
		Self { target_id, admin_key: None, secure_resource: false, property_keys: Vec::new() }
	}

	/// Overrides the admin key.
	pub fn with_admin_key(mut self, admin_key: impl Into<Secret>) -> Self {
		self.admin_key = Some(admin_key.into());

		self
	}

	/// Sets `secure_resource`.
	pub fn with_secure_resource(mut self, secure_resource: bool) -> Self {
		self.secure_resource = secure_resource;

		self
	}

	/// Sets the property keys to request.
	pub fn with_property_keys(mut self, keys: impl IntoIterator<Item = PropertyKey>) -> Self {
		self.property_keys = keys.into_iter().collect();

		self
	}
}

/// Input for [`KakaoClient::users_info`].
///
/// Only the first id in `target_ids` is sent. The remaining ids are dropped with a warning,
/// so callers wanting several profiles should issue one call per id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsersInfoRequest {
	/// Users to look up.
	pub target_ids: Vec<i64>,
	/// Overrides the admin key for this call.
	pub admin_key: Option<Secret>,
	/// Keys to request; `None` or an empty list falls back to [`PropertyKey::BULK_DEFAULT`].
	pub property_keys: Option<Vec<PropertyKey>>,
}
impl UsersInfoRequest {
	/// Looks up `target_ids` with the client's default admin key.
	pub fn new(target_ids: impl IntoIterator<Item = i64>) -> Self {
		Self { target_ids: target_ids.into_iter().collect(), admin_key: None, property_keys: None }
	}

	/// Overrides the admin key.
	pub fn with_admin_key(mut self, admin_key: impl Into<Secret>) -> Self {
		self.admin_key = Some(admin_key.into());

		self
	}

	/// Sets the property keys to request.
	pub fn with_property_keys(mut self, keys: impl IntoIterator<Item = PropertyKey>) -> Self {
		self.property_keys = Some(keys.into_iter().collect());

		self
	}
}

/// Input for [`KakaoClient::user_list`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserListRequest {
	/// Overrides the admin key for this call.
	pub admin_key: Option<Secret>,
	/// Page size; Kakao accepts 1 to 100.
	pub limit: u32,
	/// Start the page after this user id.
	pub from_id: Option<i64>,
	/// Sort order.
	pub order: Order,
}
impl UserListRequest {
	/// Page size used when none is given.
	pub const DEFAULT_LIMIT: u32 = 100;

	/// Overrides the admin key.
	pub fn with_admin_key(mut self, admin_key: impl Into<Secret>) -> Self {
		self.admin_key = Some(admin_key.into());

		self
	}

	/// Sets the page size. The value is passed through unchecked.
	pub fn with_limit(mut self, limit: u32) -> Self {
		self.limit = limit;

		self
	}

	/// Sets the `from_id` cursor.
	pub fn with_from_id(mut self, from_id: i64) -> Self {
		self.from_id = Some(from_id);

		self
	}

	/// Sets the sort order.
	pub fn with_order(mut self, order: Order) -> Self {
		self.order = order;

		self
	}
}
impl Default for UserListRequest {
	fn default() -> Self {
		Self { admin_key: None, limit: Self::DEFAULT_LIMIT, from_id: None, order: Order::Asc }
	}
}

impl<C, M> KakaoClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Fetches the profile of the access token's owner.
	pub async fn user_info(&self, access_token: &str, request: UserInfoRequest) -> Result<UserInfo> {
		const OPERATION: Operation = Operation::UserInfo;

		self.observe(OPERATION, async {
			let access_token = super::require_access_token(access_token, OPERATION)?;
			let method = if request.property_keys.is_some() { Method::POST } else { Method::GET };
			let mut api =
				ApiRequest::new(OPERATION, method, self.endpoints.api(ApiEndpoint::UserInfo)?)
					.bearer(access_token)
					.query("secure_resource", bool_str(request.secure_resource));

			if let Some(keys) = &request.property_keys {
				api = api.query("property_keys", &encode_json("property_keys", keys)?);
			}

			self.execute(api).await
		})
		.await
	}

	/// Fetches any app user's profile with the admin key.
	pub async fn user_info_by_admin(&self, request: AdminUserInfoRequest) -> Result<UserInfo> {
		const OPERATION: Operation = Operation::UserInfoByAdmin;

		self.observe(OPERATION, async {
			let admin_key =
				self.credentials.resolve_admin_key(request.admin_key.as_ref(), OPERATION)?;
			let mut api =
				ApiRequest::new(OPERATION, Method::POST, self.endpoints.api(ApiEndpoint::UserInfo)?)
					.admin_key(admin_key)
					.query("secure_resource", bool_str(request.secure_resource));

			if !request.property_keys.is_empty() {
				api = api.query("property_keys", &encode_json("property_keys", &request.property_keys)?);
			}

			let api = api
				.form("target_id_type", "user_id")
				.form("target_id", request.target_id.to_string());

			self.execute(api).await
		})
		.await
	}

	/// Fetches profiles with the admin key.
	///
	/// Only the first id of [`UsersInfoRequest::target_ids`] is sent.
	pub async fn users_info(&self, request: UsersInfoRequest) -> Result<Vec<UserInfo>> {
		const OPERATION: Operation = Operation::UsersInfo;

		self.observe(OPERATION, async {
			let admin_key =
				self.credentials.resolve_admin_key(request.admin_key.as_ref(), OPERATION)?;
			let sent = &request.target_ids[..request.target_ids.len().min(1)];

			#[cfg(feature = "tracing")]
			if request.target_ids.len() > sent.len() {
				tracing::warn!(
					requested = request.target_ids.len(),
					sent = sent.len(),
					"users_info sends only the first target id; the rest are dropped"
				);
			}

			let keys = request
				.property_keys
				.as_deref()
				.filter(|keys| !keys.is_empty())
				.unwrap_or(&PropertyKey::BULK_DEFAULT);
			let api =
				ApiRequest::new(OPERATION, Method::GET, self.endpoints.api(ApiEndpoint::UsersInfo)?)
					.admin_key(admin_key)
					.query("target_id_type", "user_id")
					.query("target_ids", &encode_json("target_ids", sent)?)
					.query("property_keys", &encode_json("property_keys", keys)?);

			self.execute(api).await
		})
		.await
	}

	/// Lists the ids of users connected to the app, one page at a time.
	pub async fn user_list(&self, request: UserListRequest) -> Result<UserListResponse> {
		const OPERATION: Operation = Operation::UserList;

		self.observe(OPERATION, async {
			let admin_key =
				self.credentials.resolve_admin_key(request.admin_key.as_ref(), OPERATION)?;
			let mut api =
				ApiRequest::new(OPERATION, Method::GET, self.endpoints.api(ApiEndpoint::UserList)?)
					.admin_key(admin_key)
					.query("limit", &request.limit.to_string());

			if let Some(from_id) = request.from_id {
				api = api.query("from_id", &from_id.to_string());
			}

			let api = api.query("order", request.order.as_str());

			self.execute(api).await
		})
		.await
	}
}

fn bool_str(value: bool) -> &'static str {
	if value { "true" } else { "false" }
}
