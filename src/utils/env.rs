use std::collections::HashMap;
use std::{env, fmt, io};

use heck::ToShoutySnakeCase;

/// KeepUpEnv allows us to mock environment variables while
/// running tests. That way we can run our tests in parallel,
/// and our local development environment will not have unintended
/// side effects on our tests.
#[derive(Debug, Clone)]
pub struct KeepUpEnv {
    mock_store: Option<HashMap<String, String>>,
}

impl Default for KeepUpEnv {
    fn default() -> KeepUpEnv {
        KeepUpEnv::new()
    }
}

impl KeepUpEnv {
    /// creates a new environment variable store
    pub fn new() -> KeepUpEnv {
        let mock_store = if cfg!(test) {
            Some(HashMap::new())
        } else {
            None
        };

        KeepUpEnv { mock_store }
    }

    /// returns the value of the environment variable if it exists
    pub fn get(&self, key: KeepUpEnvKey) -> io::Result<Option<String>> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let result = match &self.mock_store {
            Some(mock_store) => mock_store.get(&key_str).map(|v| v.to_owned()),
            None => match env::var(&key_str) {
                Ok(data) => Some(data),
                Err(env::VarError::NotPresent) => None,
                Err(env::VarError::NotUnicode(_)) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!(
                            "The value of the environment variable \"{}\" is not valid Unicode.",
                            &key_str
                        ),
                    ));
                }
            },
        };

        match &result {
            Some(value) => tracing::debug!("read environment variable ${} = {}", &key_str, value),
            None => tracing::trace!("could not find ${}", &key_str),
        }

        Ok(result)
    }

    /// sets a variable in the mock store; only available in tests
    #[cfg(test)]
    pub fn insert(&mut self, key: KeepUpEnvKey, value: &str) {
        if let Some(mock_store) = &mut self.mock_store {
            mock_store.insert(key.to_string(), value.into());
        }
    }
}

/// KeepUpEnvKey defines all of the environment variables
/// that are respected by keep-up. Each environment variable is prefixed
/// with `KEEP_UP_` and the suffix is the name of the key defined here,
/// converted from CamelCase to SHOUTY_SNAKE_CASE.
/// For example, `KeepUpEnvKey::GraphqlUrl.to_string()` becomes `KEEP_UP_GRAPHQL_URL`
#[derive(Debug, Copy, Clone)]
pub enum KeepUpEnvKey {
    GraphqlUrl,
    ClientTimeout,
}

impl fmt::Display for KeepUpEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{:?}", self).to_shouty_snake_case();
        write!(fmt, "KEEP_UP_{}", &dbg)
    }
}
