use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::Parser;
use http::{HeaderMap, HeaderName, HeaderValue};
use keep_up_client::{ClientConfig, DEFAULT_RETRIES};
use url::Url;

use crate::{
    utils::{
        env::{KeepUpEnv, KeepUpEnvKey},
        parsers::parse_header,
    },
    KeepUpError, KeepUpErrorSuggestion, KeepUpResult,
};

/// Where keep-up looks for its GraphQL endpoint when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/graphql";

#[derive(Debug, Parser)]
pub struct ClientOpts {
    /// The GraphQL endpoint to query. Falls back to $KEEP_UP_GRAPHQL_URL,
    /// then to http://localhost:8080/graphql
    #[arg(long)]
    endpoint: Option<Url>,

    /// headers to pass to the endpoint. Values must be key:value pairs.
    /// If a value has a space in it, use quotes around the pair,
    /// ex. -H "Authorization:Bearer abc"
    #[arg(value_name = "KEY:VALUE", long = "header", short = 'H', value_parser = parse_header)]
    headers: Vec<(HeaderName, HeaderValue)>,

    /// Seconds to wait for a response before giving up. Falls back to $KEEP_UP_CLIENT_TIMEOUT
    #[arg(long = "client-timeout")]
    client_timeout: Option<u64>,

    /// How many times a failed request is retried
    #[arg(long, default_value_t = DEFAULT_RETRIES)]
    retries: usize,
}

impl ClientOpts {
    pub(crate) fn client_config(&self, env_store: &KeepUpEnv) -> KeepUpResult<ClientConfig> {
        let endpoint = self.endpoint(env_store)?;
        let timeout = self.timeout(env_store)?;
        let headers: HeaderMap = self.headers.iter().cloned().collect();
        tracing::debug!(%endpoint, ?timeout, headers = headers.len(), "configuring client");

        Ok(ClientConfig::builder()
            .endpoint(endpoint)
            .headers(headers)
            .and_timeout(timeout)
            .retries(self.retries)
            .build())
    }

    fn endpoint(&self, env_store: &KeepUpEnv) -> KeepUpResult<Url> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        let key = KeepUpEnvKey::GraphqlUrl;
        match env_store.get(key)? {
            Some(raw) => Url::parse(&raw).map_err(|err| {
                KeepUpError::new(anyhow!("${key} is not a valid URL: {err}")).with_suggestion(
                    KeepUpErrorSuggestion::Adhoc(format!(
                        "Set ${key} to an absolute URL such as {DEFAULT_ENDPOINT}"
                    )),
                )
            }),
            None => Ok(Url::parse(DEFAULT_ENDPOINT)?),
        }
    }

    fn timeout(&self, env_store: &KeepUpEnv) -> KeepUpResult<Option<Duration>> {
        if let Some(seconds) = self.client_timeout {
            return Ok(Some(Duration::from_secs(seconds)));
        }
        let key = KeepUpEnvKey::ClientTimeout;
        env_store
            .get(key)?
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .with_context(|| format!("${key} must be a whole number of seconds"))
                    .map_err(KeepUpError::from)
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use speculoos::prelude::*;

    use super::{ClientOpts, DEFAULT_ENDPOINT};
    use crate::utils::env::{KeepUpEnv, KeepUpEnvKey};

    fn parse(args: &[&str]) -> ClientOpts {
        ClientOpts::parse_from(std::iter::once("keep-up").chain(args.iter().copied()))
    }

    #[test]
    fn it_defaults_to_localhost() {
        let config = parse(&[]).client_config(&KeepUpEnv::new()).unwrap();
        assert_that!(config.endpoint().as_str()).is_equal_to(DEFAULT_ENDPOINT);
    }

    #[test]
    fn it_reads_the_endpoint_from_the_environment() {
        let mut env_store = KeepUpEnv::new();
        env_store.insert(KeepUpEnvKey::GraphqlUrl, "https://tasks.example.com/graphql");
        let config = parse(&[]).client_config(&env_store).unwrap();
        assert_that!(config.endpoint().as_str()).is_equal_to("https://tasks.example.com/graphql");
    }

    #[test]
    fn the_flag_wins_over_the_environment() {
        let mut env_store = KeepUpEnv::new();
        env_store.insert(KeepUpEnvKey::GraphqlUrl, "https://tasks.example.com/graphql");
        let config = parse(&["--endpoint", "http://127.0.0.1:4000/graphql"])
            .client_config(&env_store)
            .unwrap();
        assert_that!(config.endpoint().as_str()).is_equal_to("http://127.0.0.1:4000/graphql");
    }

    #[test]
    fn it_rejects_a_bad_endpoint_in_the_environment() {
        let mut env_store = KeepUpEnv::new();
        env_store.insert(KeepUpEnvKey::GraphqlUrl, "not a url");
        let error = parse(&[]).client_config(&env_store).unwrap_err();
        assert_that!(error.message()).contains("KEEP_UP_GRAPHQL_URL");
        assert_that!(error.suggestion()).is_some();
    }

    #[test]
    fn it_reads_the_timeout_from_flag_or_environment() {
        let mut env_store = KeepUpEnv::new();
        env_store.insert(KeepUpEnvKey::ClientTimeout, "12");
        assert_that!(parse(&[]).timeout(&env_store).unwrap())
            .is_equal_to(Some(Duration::from_secs(12)));
        assert_that!(parse(&["--client-timeout", "3"]).timeout(&env_store).unwrap())
            .is_equal_to(Some(Duration::from_secs(3)));
        assert_that!(parse(&[]).timeout(&KeepUpEnv::new()).unwrap()).is_none();
    }

    #[test]
    fn it_rejects_a_non_numeric_timeout() {
        let mut env_store = KeepUpEnv::new();
        env_store.insert(KeepUpEnvKey::ClientTimeout, "soon");
        assert_that!(parse(&[]).timeout(&env_store)).is_err();
    }

    #[test]
    fn it_collects_repeated_headers() {
        let opts = parse(&["-H", "x-one:1", "--header", "x-two: 2"]);
        assert_that!(opts.headers).has_length(2);
        assert_that!(opts.retries).is_equal_to(keep_up_client::DEFAULT_RETRIES);
    }
}
