//! Project name value object
//!
//! Non-empty, ASCII alphanumeric characters and underscores only. The name
//! doubles as the root directory name, so separators and spaces are never
//! allowed.

use std::fmt;

use crate::error::{ScaffoldError, ScaffoldResult};

/// A validated project name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a raw name
    pub fn parse(raw: &str) -> ScaffoldResult<Self> {
        if raw.is_empty() {
            return Err(ScaffoldError::InvalidName {
                name: raw.to_string(),
                reason: "name must not be empty".to_string(),
            });
        }

        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(ScaffoldError::InvalidName {
                name: raw.to_string(),
                reason: format!(
                    "contains {:?}; only letters, digits and underscores are allowed",
                    bad
                ),
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ProjectName {
    type Error = ScaffoldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
