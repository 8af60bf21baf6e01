use std::fmt;

use crate::error::{ModelError, ModelResult};

/// Inventory boundary the runner list is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryScope {
    /// Runners registered to a single repository.
    Repository { owner: String, repo: String },
    /// Runners registered to an organization.
    Organization(String),
    /// Runners registered to an enterprise.
    Enterprise(String),
}

impl InventoryScope {
    /// Resolve the scope from explicit identifiers.
    ///
    /// Rules:
    /// - `organization` and `enterprise` together are rejected;
    /// - `organization` selects the organization scope;
    /// - `enterprise` selects the enterprise scope;
    /// - otherwise `repository` (`owner/repo`) selects the repository scope.
    ///
    /// Empty or blank values count as not set.
    ///
    /// # Examples
    /// ```
    /// use rpick_model::{InventoryScope, ModelError};
    ///
    /// let repo = InventoryScope::resolve(Some("octo/app"), None, None).unwrap();
    /// assert_eq!(repo.path(), "repos/octo/app/actions/runners");
    ///
    /// let org = InventoryScope::resolve(Some("octo/app"), Some("octo"), Some("")).unwrap();
    /// assert_eq!(org.path(), "orgs/octo/actions/runners");
    ///
    /// let err = InventoryScope::resolve(None, Some("octo"), Some("acme")).unwrap_err();
    /// assert_eq!(err, ModelError::ConflictingScope);
    /// ```
    pub fn resolve(
        repository: Option<&str>,
        organization: Option<&str>,
        enterprise: Option<&str>,
    ) -> ModelResult<Self> {
        let organization = non_blank(organization);
        let enterprise = non_blank(enterprise);

        match (organization, enterprise) {
            (Some(_), Some(_)) => Err(ModelError::ConflictingScope),
            (Some(org), None) => Ok(Self::Organization(org.to_string())),
            (None, Some(ent)) => Ok(Self::Enterprise(ent.to_string())),
            (None, None) => {
                let repository = non_blank(repository).ok_or(ModelError::MissingInput("repository"))?;
                Self::repository(repository)
            }
        }
    }

    /// Parse an `owner/repo` pair into a repository scope.
    pub fn repository(full_name: &str) -> ModelResult<Self> {
        match full_name.trim().split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self::Repository {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(ModelError::InvalidRepository(full_name.to_string())),
        }
    }

    /// API path of the runner listing for this scope, without a leading slash.
    pub fn path(&self) -> String {
        match self {
            Self::Repository { owner, repo } => format!("repos/{owner}/{repo}/actions/runners"),
            Self::Organization(org) => format!("orgs/{org}/actions/runners"),
            Self::Enterprise(ent) => format!("enterprises/{ent}/actions/runners"),
        }
    }

    /// Short scope kind used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Repository { .. } => "repository",
            Self::Organization(_) => "organization",
            Self::Enterprise(_) => "enterprise",
        }
    }
}

impl fmt::Display for InventoryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repository { owner, repo } => write!(f, "repository {owner}/{repo}"),
            Self::Organization(org) => write!(f, "organization {org}"),
            Self::Enterprise(ent) => write!(f, "enterprise {ent}"),
        }
    }
}

fn non_blank(v: Option<&str>) -> Option<&str> {
    v.map(str::trim).filter(|s| !s.is_empty())
}
