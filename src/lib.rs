//! Typed async client for Kakao Login: authorization URLs, token exchanges, and the user
//! management endpoints, with per-call credential overrides and consent-aware profile models.
//!
//! Start with [`KakaoClient`] for a single credential set, or [`ClientRegistry`] when one
//! process serves several Kakao apps and should share one client per credential tuple.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod model;
pub mod obs;
pub mod registry;

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use auth::{Credentials, Secret};
pub use client::KakaoClient;
#[cfg(feature = "reqwest")] pub use client::ReqwestKakaoClient;
pub use registry::ClientRegistry;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, tokio as _};
