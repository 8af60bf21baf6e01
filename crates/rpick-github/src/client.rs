use async_trait::async_trait;
use reqwest::{StatusCode, header::ACCEPT};
use rpick_core::{FetchError, InventoryFetch, InventoryResponse};
use rpick_model::{InventoryPage, InventoryScope};
use tracing::{debug, instrument, warn};

use crate::config::GithubConfig;

const GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// Runner inventory read through the GitHub REST API.
///
/// Each [`InventoryFetch::fetch`] issues exactly one `GET` request; no retries, no pagination.
#[derive(Debug)]
pub struct GithubInventory {
    http: reqwest::Client,
    config: GithubConfig,
}

impl GithubInventory {
    pub fn new(config: GithubConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { http, config })
    }

}

#[async_trait]
impl InventoryFetch for GithubInventory {
    fn name(&self) -> &'static str {
        "github"
    }

    #[instrument(level = "debug", skip(self, scope), fields(kind = scope.kind()))]
    async fn fetch(&self, scope: &InventoryScope) -> Result<InventoryResponse, FetchError> {
        let url = self.config.url_for(&scope.path());
        debug!(%url, "requesting runner inventory");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.token)
            .header(ACCEPT, GITHUB_JSON)
            .header(API_VERSION_HEADER, API_VERSION)
            .query(&[("per_page", self.config.per_page)])
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), %url, "runner inventory request failed");
            return Ok(InventoryResponse::status_only(status.as_u16()));
        }

        let page = response
            .json::<InventoryPage>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        debug!(
            runners = page.runners.len(),
            total = page.total_count,
            "runner inventory decoded"
        );
        Ok(InventoryResponse::ok(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rpick_core::{CoreError, select_runner};
    use rpick_model::{FallbackRunner, PrimariesRequired, SelectionPolicy};
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, query_param},
    };

    fn mk_inventory(server: &MockServer) -> GithubInventory {
        GithubInventory::new(GithubConfig::new("fake-token").with_api_url(server.uri()))
            .expect("client must build")
    }

    fn mk_policy() -> SelectionPolicy {
        SelectionPolicy::new(
            "self-hosted,linux".parse().unwrap(),
            FallbackRunner::new("ubuntu-latest").unwrap(),
            None,
        )
    }

    fn runners_body() -> serde_json::Value {
        json!({
            "total_count": 2,
            "runners": [
                {
                    "id": 1,
                    "name": "build-01",
                    "os": "linux",
                    "status": "online",
                    "busy": true,
                    "labels": [{"id": 1, "name": "self-hosted", "type": "read-only"},
                               {"id": 2, "name": "linux", "type": "read-only"}]
                },
                {
                    "id": 2,
                    "name": "build-02",
                    "os": "linux",
                    "status": "offline",
                    "busy": false,
                    "labels": [{"id": 1, "name": "self-hosted", "type": "read-only"},
                               {"id": 2, "name": "linux", "type": "read-only"}]
                }
            ]
        })
    }

    #[tokio::test]
    async fn sends_authenticated_request_to_repository_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/my-user/my-awesome-repo/actions/runners"))
            .and(header("authorization", "Bearer fake-token"))
            .and(header("accept", GITHUB_JSON))
            .and(header(API_VERSION_HEADER, API_VERSION))
            .and(query_param("per_page", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(runners_body()))
            .expect(1)
            .mount(&server)
            .await;

        let scope = InventoryScope::repository("my-user/my-awesome-repo").unwrap();
        let res = mk_inventory(&server).fetch(&scope).await.unwrap();

        assert!(res.is_success());
        assert_eq!(res.page.runners.len(), 2);
        assert_eq!(res.page.total_count, Some(2));
        assert!(res.page.runners[0].busy);
    }

    #[tokio::test]
    async fn non_ok_status_is_returned_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/acme/actions/runners"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "message": "Resource not accessible by integration"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let scope = InventoryScope::Organization("acme".into());
        let res = mk_inventory(&server).fetch(&scope).await.unwrap();

        assert_eq!(res.status, 403);
        assert!(res.page.runners.is_empty());
    }

    #[tokio::test]
    async fn undecodable_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let scope = InventoryScope::Enterprise("acme".into());
        let err = mk_inventory(&server).fetch(&scope).await.unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error() {
        let inventory =
            GithubInventory::new(GithubConfig::new("t").with_api_url("http://127.0.0.1:1"))
                .unwrap();

        let scope = InventoryScope::Organization("acme".into());
        let err = inventory.fetch(&scope).await.unwrap_err();

        assert!(matches!(err, FetchError::Http(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn selects_primary_from_live_inventory() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/enterprises/acme/actions/runners"))
            .respond_with(ResponseTemplate::new(200).set_body_json(runners_body()))
            .expect(1)
            .mount(&server)
            .await;

        let scope = InventoryScope::resolve(Some("o/r"), None, Some("acme")).unwrap();
        let res = select_runner(&mk_inventory(&server), &scope, &mk_policy())
            .await
            .unwrap();

        assert_eq!(res.use_runner_json(), r#"["self-hosted","linux"]"#);
        assert!(res.primary_online);
    }

    #[tokio::test]
    async fn busy_primaries_fall_back_under_quorum() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(runners_body()))
            .mount(&server)
            .await;

        let policy = mk_policy().with_primaries_required(PrimariesRequired::try_from(1).unwrap());
        let scope = InventoryScope::repository("o/r").unwrap();
        let res = select_runner(&mk_inventory(&server), &scope, &policy)
            .await
            .unwrap();

        assert_eq!(res.use_runner_json(), r#"["ubuntu-latest"]"#);
        assert!(res.primary_online);
        assert!(!res.sufficient_primaries);
    }

    #[tokio::test]
    async fn server_error_surfaces_as_inventory_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let scope = InventoryScope::repository("o/r").unwrap();
        let err = select_runner(&mk_inventory(&server), &scope, &mk_policy())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InventoryUnavailable { status: 500 }));
    }

    #[tokio::test]
    async fn malformed_runner_entry_does_not_block_selection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 3,
                "runners": [
                    {"id": 1, "labels": [{"name": "self-hosted"}, {"name": "linux"}]},
                    {"id": 2, "status": null, "busy": null, "labels": null},
                    {"id": 3, "status": "online", "busy": null,
                     "labels": [{"name": "self-hosted"}, {"name": "linux"}]}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let policy = mk_policy().with_primaries_required(PrimariesRequired::try_from(1).unwrap());
        let scope = InventoryScope::repository("o/r").unwrap();
        let res = select_runner(&mk_inventory(&server), &scope, &policy)
            .await
            .unwrap();

        assert_eq!(res.use_runner_json(), r#"["self-hosted","linux"]"#);
        assert!(res.primary_online);
        assert!(res.sufficient_primaries);
    }
}
