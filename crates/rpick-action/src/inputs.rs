use rpick_github::GithubConfig;
use rpick_model::{
    FallbackRunner, InventoryScope, ModelError, ModelResult, PrimariesRequired, PrimaryLabels,
    SelectionPolicy,
};

use crate::cli::{Cli, non_blank};

/// Everything the selector needs, resolved once from the action inputs.
#[derive(Debug, Clone)]
pub struct ActionInputs {
    pub scope: InventoryScope,
    pub policy: SelectionPolicy,
    pub github: GithubConfig,
}

impl ActionInputs {
    /// Validate inputs before any request is made.
    ///
    /// Required inputs are checked first, then the quorum, then the scope.
    pub fn from_cli(cli: &Cli) -> ModelResult<Self> {
        let token = required(cli.github_token.as_deref(), "github-token")?;
        let primary: PrimaryLabels =
            required(cli.primary_runner.as_deref(), "primary-runner")?.parse()?;
        let fallback: FallbackRunner =
            required(cli.fallback_runner.as_deref(), "fallback-runner")?.parse()?;
        let primaries_required = match cli.primaries_required.as_deref() {
            Some(raw) => PrimariesRequired::parse_optional(raw)?,
            None => None,
        };

        let scope = InventoryScope::resolve(
            cli.repository.as_deref(),
            cli.organization.as_deref(),
            cli.enterprise.as_deref(),
        )?;

        Ok(Self {
            scope,
            policy: SelectionPolicy::new(primary, fallback, primaries_required),
            github: GithubConfig::new(token).with_api_url(cli.api_url()),
        })
    }
}

fn required<'a>(v: Option<&'a str>, name: &'static str) -> ModelResult<&'a str> {
    non_blank(v).ok_or(ModelError::MissingInput(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_cli() -> Cli {
        Cli {
            github_token: Some("fake-token".into()),
            primary_runner: Some("self-hosted,linux".into()),
            fallback_runner: Some("ubuntu-latest".into()),
            repository: Some("fake-owner/fake-repo".into()),
            ..Default::default()
        }
    }

    #[test]
    fn resolves_repository_scope_by_default() {
        let inputs = ActionInputs::from_cli(&mk_cli()).unwrap();

        assert_eq!(inputs.scope.path(), "repos/fake-owner/fake-repo/actions/runners");
        assert_eq!(inputs.policy.primary.as_slice(), ["self-hosted", "linux"]);
        assert_eq!(inputs.policy.fallback.as_str(), "ubuntu-latest");
        assert!(!inputs.policy.has_quorum());
        assert_eq!(inputs.github.token, "fake-token");
        assert_eq!(inputs.github.api_url, "https://api.github.com");
    }

    #[test]
    fn missing_required_inputs_are_reported_by_name() {
        let cases: [(fn(&mut Cli), &str); 3] = [
            (|c| c.github_token = None, "github-token"),
            (|c| c.primary_runner = Some(String::new()), "primary-runner"),
            (|c| c.fallback_runner = Some("   ".into()), "fallback-runner"),
        ];

        for (mutate, name) in cases {
            let mut cli = mk_cli();
            mutate(&mut cli);

            let err = ActionInputs::from_cli(&cli).unwrap_err();
            assert_eq!(err.to_string(), format!("Input required and not supplied: {name}"));
        }
    }

    #[test]
    fn label_list_with_only_commas_is_rejected() {
        let cli = Cli {
            primary_runner: Some(",,".into()),
            ..mk_cli()
        };
        assert_eq!(
            ActionInputs::from_cli(&cli).unwrap_err(),
            ModelError::EmptyPrimaryLabels
        );
    }

    #[test]
    fn organization_and_enterprise_are_mutually_exclusive() {
        let cli = Cli {
            organization: Some("org".into()),
            enterprise: Some("ent".into()),
            ..mk_cli()
        };
        let err = ActionInputs::from_cli(&cli).unwrap_err();

        assert_eq!(err, ModelError::ConflictingScope);
        assert_eq!(err.to_string(), "Cannot specify both organization and enterprise");
    }

    #[test]
    fn enterprise_scope_and_custom_api_url() {
        let cli = Cli {
            enterprise: Some("acme".into()),
            organization: Some(String::new()),
            api_url: Some("https://ghe.example.com/api/v3".into()),
            ..mk_cli()
        };
        let inputs = ActionInputs::from_cli(&cli).unwrap();

        assert_eq!(inputs.scope, InventoryScope::Enterprise("acme".into()));
        assert_eq!(inputs.github.api_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn quorum_parsing() {
        let with = |raw: &str| Cli {
            primaries_required: Some(raw.to_string()),
            ..mk_cli()
        };

        let three = ActionInputs::from_cli(&with("3")).unwrap();
        assert_eq!(three.policy.primaries_required.map(|q| q.get()), Some(3));

        assert!(!ActionInputs::from_cli(&with("")).unwrap().policy.has_quorum());
        assert!(!ActionInputs::from_cli(&with("0")).unwrap().policy.has_quorum());

        for bad in ["-2", "many"] {
            let err = ActionInputs::from_cli(&with(bad)).unwrap_err();
            assert!(matches!(err, ModelError::InvalidQuorum(_)), "{bad:?}");
        }
    }
}
