mod suggestion;

pub use suggestion::KeepUpErrorSuggestion;

pub type KeepUpResult<T> = std::result::Result<T, KeepUpError>;

use std::fmt::{self, Display};
use console::style;
use keep_up_client::KeepUpClientError;

/// A specialized `Error` type for keep-up that wraps `anyhow`
/// and carries an optional suggestion for the person running it.
#[derive(Debug)]
pub struct KeepUpError {
    error: anyhow::Error,
    suggestion: Option<KeepUpErrorSuggestion>,
}

impl KeepUpError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let error = error.into();
        let suggestion = error
            .downcast_ref::<KeepUpClientError>()
            .and_then(KeepUpErrorSuggestion::for_client_error);

        Self { error, suggestion }
    }

    pub fn set_suggestion(&mut self, suggestion: KeepUpErrorSuggestion) {
        self.suggestion = Some(suggestion);
    }

    pub fn with_suggestion(mut self, suggestion: KeepUpErrorSuggestion) -> Self {
        self.set_suggestion(suggestion);
        self
    }

    pub fn suggestion(&self) -> Option<&KeepUpErrorSuggestion> {
        self.suggestion.as_ref()
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl Display for KeepUpError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error_descriptor = style("error:").red().bold();
        writeln!(formatter, "{} {:?}", error_descriptor, &self.error)?;

        if let Some(suggestion) = &self.suggestion {
            writeln!(formatter, "        {}", suggestion)?;
        }
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> From<E> for KeepUpError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
