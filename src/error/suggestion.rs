use std::fmt::{self, Display};

use keep_up_client::KeepUpClientError;

use crate::utils::env::KeepUpEnvKey;

/// A hint printed underneath an error
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeepUpErrorSuggestion {
    CheckEndpoint,
    Adhoc(String),
}

impl KeepUpErrorSuggestion {
    pub(crate) fn for_client_error(error: &KeepUpClientError) -> Option<Self> {
        match error {
            KeepUpClientError::Service { .. } | KeepUpClientError::ServiceReady(_) => {
                Some(KeepUpErrorSuggestion::CheckEndpoint)
            }
            _ => None,
        }
    }
}

impl Display for KeepUpErrorSuggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepUpErrorSuggestion::CheckEndpoint => write!(
                formatter,
                "Check that the endpoint is running, or point keep-up elsewhere with `--endpoint` \
                 or ${}.",
                KeepUpEnvKey::GraphqlUrl
            ),
            KeepUpErrorSuggestion::Adhoc(suggestion) => write!(formatter, "{suggestion}"),
        }
    }
}
