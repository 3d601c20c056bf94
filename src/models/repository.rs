//! Repository reference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GitHubError, Result};

/// Identifies a repository by owner and name.
///
/// Both parts are interpolated into request paths verbatim. Callers are
/// responsible for any escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    /// User or organization login.
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RepoRef {
    /// Create a repository reference.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Build `repos/{owner}/{repo}/{suffix}`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidRepository`] if owner or repo is empty,
    /// since the path would address a different resource.
    pub fn path(&self, suffix: &str) -> Result<String> {
        if self.owner.is_empty() || self.repo.is_empty() {
            return Err(GitHubError::InvalidRepository(self.to_string()));
        }
        Ok(format!("repos/{}/{}/{}", self.owner, self.repo, suffix))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoRef {
    type Err = GitHubError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self::new(owner, repo))
            }
            _ => Err(GitHubError::InvalidRepository(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        let repo = RepoRef::new("o", "r");
        assert_eq!(
            repo.path("properties/values").unwrap(),
            "repos/o/r/properties/values"
        );
    }

    #[test]
    fn test_path_rejects_empty_parts() {
        assert!(RepoRef::new("o", "").path("x").is_err());
        assert!(RepoRef::new("", "r").path("x").is_err());
    }

    #[test]
    fn test_from_str() {
        let repo: RepoRef = "octo-org/hello-world".parse().unwrap();
        assert_eq!(repo, RepoRef::new("octo-org", "hello-world"));
        assert_eq!(repo.to_string(), "octo-org/hello-world");
    }

    #[test]
    fn test_from_str_rejects_malformed() {
        for input in ["", "octo-org", "/repo", "owner/", "a/b/c"] {
            assert!(
                input.parse::<RepoRef>().is_err(),
                "expected '{input}' to be rejected"
            );
        }
    }
}
