//! Typed GraphQL operations for keep-up and the fetch lifecycle its views observe.

mod client;
mod error;
mod fetch;

/// The queries keep-up issues
pub mod operations;

pub use client::{ClientConfig, GraphQLStack, DEFAULT_RETRIES};
pub use error::KeepUpClientError;
pub use fetch::{FetchState, QueryWatch};
