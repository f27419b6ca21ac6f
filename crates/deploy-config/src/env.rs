use std::fmt;

use crate::error::DeployError;

/// Variable naming the active environment.
pub const ENV_VAR: &str = "ENV";

/// Name of the active configuration set, e.g. `mainnet` or `testnet`.
///
/// Chosen once at startup; every document is read from the directory of the
/// same name under the config root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Environment(String);

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Environment(name.into())
    }

    /// Reads the environment name from [`ENV_VAR`].
    pub fn from_env() -> Result<Self, DeployError> {
        Self::from_var(ENV_VAR)
    }

    pub fn from_var(var: &str) -> Result<Self, DeployError> {
        match std::env::var(var) {
            Ok(v) if !v.trim().is_empty() => Ok(Environment(v.trim().to_string())),
            _ => Err(DeployError::MissingEnv(var.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
