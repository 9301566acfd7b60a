#![warn(missing_docs)]

//! The HTTP transport under keep-up's GraphQL client, as [`tower`] services

use std::time::Duration;

use buildstructor::Builder;
use bytes::Bytes;
use derive_getters::Getters;
use http_body_util::Full;
use tower::util::BoxCloneService;

mod error;
pub mod extend_headers;
mod reqwest;
pub mod retry;

pub use error::{BoxError, HttpServiceError};
pub use reqwest::ReqwestService;

/// Installs ring as rustls' crypto provider when a binary linking this crate starts.
#[ctor::ctor]
fn install_ring_crypto_provider() {
    // fails only when a provider is already installed
    rustls::crypto::ring::default_provider()
        .install_default()
        .ok();
}

/// Deadline for a whole request when [`HttpServiceConfig`] sets none
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// A request with its body already in memory, so retries can replay it
pub type HttpRequest = http::Request<Full<Bytes>>;
/// A response whose body has been read to the end
pub type HttpResponse = http::Response<Bytes>;
/// The type-erased transport the GraphQL layer sits on
pub type HttpService = BoxCloneService<HttpRequest, HttpResponse, HttpServiceError>;

/// Settings for a [`ReqwestService`]
#[derive(Clone, Debug, Builder, Default, Getters)]
pub struct HttpServiceConfig {
    timeout: Option<Duration>,
}
