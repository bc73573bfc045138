//! Client registry keyed by credential tuple.
//!
//! Applications serving several Kakao apps keep one [`ClientRegistry`] and ask it for a
//! client per [`Credentials`]. Equal tuples share one [`KakaoClient`]; every client shares
//! the registry's transport, error mapper, and endpoint bases. Sharing is an optimization
//! only: a fresh client built from an equal tuple behaves identically.

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	client::{KakaoClient, TransportErrorMapper},
	endpoint::ProviderEndpoints,
	http::ApiHttpClient,
};
#[cfg(feature = "reqwest")]
use crate::{client::ReqwestTransportErrorMapper, http::ReqwestHttpClient};

/// Factory handing out one shared [`KakaoClient`] per distinct credential tuple.
pub struct ClientRegistry<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	http_client: Arc<C>,
	transport_mapper: Arc<M>,
	endpoints: ProviderEndpoints,
	clients: Mutex<HashMap<Credentials, Arc<KakaoClient<C, M>>>>,
}
impl<C, M> ClientRegistry<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates an empty registry whose clients share the given transport + mapper pair.
	pub fn with_http_client(http_client: impl Into<Arc<C>>, mapper: impl Into<Arc<M>>) -> Self {
		Self {
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
			endpoints: ProviderEndpoints::default(),
			clients: Default::default(),
		}
	}

	/// Sets the endpoint bases for every client handed out afterwards.
	///
	/// Clients cached under the previous bases are forgotten, so later lookups build fresh
	/// ones. `Arc`s already held by callers keep their old bases.
	pub fn with_endpoints(mut self, endpoints: ProviderEndpoints) -> Self {
		self.endpoints = endpoints;
		self.clients.get_mut().clear();

		self
	}

	/// Returns the client registered for `credentials`, creating it on first use.
	///
	/// Lookup and insertion happen under one lock acquisition, so concurrent callers with
	/// equal tuples always receive the same instance.
	pub fn client(&self, credentials: Credentials) -> Arc<KakaoClient<C, M>> {
		let mut clients = self.clients.lock();

		clients
			.entry(credentials)
			.or_insert_with_key(|credentials| {
				Arc::new(
					KakaoClient::with_http_client(
						credentials.clone(),
						self.http_client.clone(),
						self.transport_mapper.clone(),
					)
					.with_endpoints(self.endpoints.clone()),
				)
			})
			.clone()
	}

	/// Number of distinct credential tuples seen so far.
	pub fn len(&self) -> usize {
		self.clients.lock().len()
	}

	/// Whether no client has been created yet.
	pub fn is_empty(&self) -> bool {
		self.clients.lock().is_empty()
	}
}
#[cfg(feature = "reqwest")]
impl ClientRegistry<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a registry backed by one default reqwest transport.
	pub fn new() -> Self {
		Self::with_http_client(ReqwestHttpClient::default(), ReqwestTransportErrorMapper)
	}
}
#[cfg(feature = "reqwest")]
impl Default for ClientRegistry<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	fn default() -> Self {
		Self::new()
	}
}
impl<C, M> Debug for ClientRegistry<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientRegistry")
			.field("endpoints", &self.endpoints)
			.field("clients", &self.len())
			.finish()
	}
}
