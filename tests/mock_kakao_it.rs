#![cfg(feature = "reqwest")]

// std
use std::time::Duration;
// crates.io
use httpmock::prelude::*;
// self
use kakao_api::{
	ClientRegistry, Credentials, KakaoClient, ReqwestKakaoClient,
	client::{
		AuthorizeRequest, CodeExchange, FORM_CONTENT_TYPE, ReqwestTransportErrorMapper,
		TokenRefresh, UserInfoRequest, UserListRequest, UsersInfoRequest,
	},
	endpoint::ProviderEndpoints,
	error::{Error, TransportError},
	http::ReqwestHttpClient,
	model::{Consent, Order},
};

const CLIENT_ID: &str = "rest-key";
const REDIRECT_URI: &str = "https://app.example/oauth/callback";
const ADMIN_KEY: &str = "admin-key";

fn endpoints(server: &MockServer) -> ProviderEndpoints {
	ProviderEndpoints::single_host(&server.base_url()).expect("Mock base URL should parse.")
}

fn build_client(server: &MockServer) -> ReqwestKakaoClient {
	KakaoClient::new(
		Credentials::new(CLIENT_ID).with_redirect_uri(REDIRECT_URI).with_admin_key(ADMIN_KEY),
	)
	.with_endpoints(endpoints(server))
}

#[tokio::test]
async fn exchange_code_round_trips_against_mock_server() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/token")
				.header("content-type", FORM_CONTENT_TYPE);
			then.status(200).header("content-type", "application/json").body(
				"{\"token_type\":\"bearer\",\"access_token\":\"access-1\",\"expires_in\":21599,\"refresh_token\":\"refresh-1\",\"refresh_token_expires_in\":5183999,\"scope\":\"account_email profile\"}",
			);
		})
		.await;
	let tokens = client
		.exchange_code(CodeExchange::new("code-1"))
		.await
		.expect("Code exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(tokens.access_token.expose(), "access-1");
	assert_eq!(tokens.refresh_token_expires_in, 5183999);
	assert_eq!(tokens.scope.as_deref(), Some("account_email profile"));
	assert!(tokens.id_token.is_none());
}

#[tokio::test]
async fn refresh_rejection_surfaces_oauth_error_body() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(400).header("content-type", "application/json").body(
				"{\"error\":\"invalid_grant\",\"error_description\":\"Invalid refresh token.\",\"error_code\":\"KOE322\"}",
			);
		})
		.await;
	let err = client
		.refresh_token(TokenRefresh::new("stale"))
		.await
		.expect_err("A rejected refresh should fail.");

	mock.assert_async().await;

	assert_eq!(err.status(), Some(400));
	assert_eq!(
		err.provider_detail().and_then(|body| body.error_code.as_deref()),
		Some("KOE322")
	);
	assert_eq!(
		err.provider_detail().and_then(|body| body.message()),
		Some("Invalid refresh token.")
	);
}

#[tokio::test]
async fn user_info_decodes_consent_states() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v2/user/me")
				.query_param("secure_resource", "true")
				.header("authorization", "Bearer access-1");
			then.status(200).header("content-type", "application/json").body(
				"{\"id\":77,\"connected_at\":\"2023-01-02T03:04:05Z\",\"kakao_account\":{\"email_needs_agreement\":true,\"gender_needs_agreement\":false,\"gender\":\"male\"}}",
			);
		})
		.await;
	let user = client
		.user_info("access-1", UserInfoRequest::default().with_secure_resource(true))
		.await
		.expect("User info should succeed.");

	mock.assert_async().await;

	let account = user.kakao_account.expect("Account should be present.");

	assert_eq!(user.id, 77);
	assert_eq!(account.email_consent(), Consent::NotGranted);
	assert!(account.gender_consent().is_granted());
	assert_eq!(account.name_consent(), Consent::NotRequested);
}

#[tokio::test]
async fn admin_calls_carry_kakao_ak_header() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let users = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v2/app/users")
				.query_param("target_id_type", "user_id")
				.query_param("target_ids", "[10]")
				.header("authorization", "KakaoAK admin-key");
			then.status(200)
				.header("content-type", "application/json")
				.body("[{\"id\":10,\"has_signed_up\":true}]");
		})
		.await;
	let ids = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/user/ids")
				.query_param("limit", "2")
				.query_param("order", "desc")
				.header("authorization", "KakaoAK admin-key");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"elements\":[3,7],\"before_url\":null,\"after_url\":\"cursor123\"}");
		})
		.await;
	let profiles = client
		.users_info(UsersInfoRequest::new([10, 11]))
		.await
		.expect("Bulk lookup should succeed.");
	let page = client
		.user_list(UserListRequest::default().with_limit(2).with_order(Order::Desc))
		.await
		.expect("User list should succeed.");

	users.assert_async().await;
	ids.assert_async().await;

	assert_eq!(profiles.len(), 1);
	assert_eq!(profiles[0].has_signed_up, Some(true));
	assert_eq!(page.elements, vec![3, 7]);
	assert_eq!(page.before_url, None);
	assert_eq!(page.after_url.as_deref(), Some("cursor123"));
}

#[tokio::test]
async fn session_endpoints_round_trip() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let logout = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/user/logout").header("authorization", "Bearer access-1");
			then.status(200).header("content-type", "application/json").body("{\"id\":77}");
		})
		.await;
	let info = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/user/access_token_info")
				.header("authorization", "Bearer access-1");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":77,\"expires_in\":7199,\"app_id\":1234}");
		})
		.await;

	assert_eq!(client.logout("access-1").await.expect("Logout should succeed.").id, 77);

	let token_info =
		client.access_token_info("access-1").await.expect("Token info should succeed.");

	logout.assert_async().await;
	info.assert_async().await;

	assert_eq!(token_info.app_id, 1234);
}

#[tokio::test]
async fn unauthorized_token_maps_to_bad_request() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/user/unlink");
			then.status(401)
				.header("content-type", "application/json")
				.body("{\"msg\":\"this access token does not exist\",\"code\":-401}");
		})
		.await;
	let err = client.unlink("expired").await.expect_err("An unknown token should fail.");

	mock.assert_async().await;

	assert!(matches!(err, Error::BadRequest { status: 401, .. }));
	assert_eq!(err.provider_detail().and_then(|body| body.code), Some(-401));
}

#[tokio::test]
async fn slow_responses_time_out() {
	let server = MockServer::start_async().await;
	let http = ReqwestHttpClient::with_timeout(Duration::from_millis(100))
		.expect("Reqwest client should build.");
	let client = ReqwestKakaoClient::with_http_client(
		Credentials::new(CLIENT_ID),
		http,
		ReqwestTransportErrorMapper,
	)
	.with_endpoints(endpoints(&server));
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/user/access_token_info");
			then.status(200).delay(Duration::from_secs(2)).body("{}");
		})
		.await;
	let err = client
		.access_token_info("access-1")
		.await
		.expect_err("A response slower than the timeout should fail.");

	assert!(matches!(err, Error::Transport(TransportError::Timeout { .. })));
}

#[tokio::test]
async fn registry_clients_follow_registry_endpoints() {
	let server = MockServer::start_async().await;
	let registry = ClientRegistry::new().with_endpoints(endpoints(&server));
	let credentials = Credentials::new(CLIENT_ID).with_redirect_uri(REDIRECT_URI);
	let client = registry.client(credentials.clone());
	let url = client
		.authorization_url(&AuthorizeRequest::default().with_state("state-1"))
		.expect("Authorization URL should build.");

	assert!(url.as_str().starts_with(&format!("{}/oauth/authorize?", server.base_url())));
	assert!(std::sync::Arc::ptr_eq(&client, &registry.client(credentials)));
	assert_eq!(registry.len(), 1);
}
