use crate::ports::outbound::{DeclaredDependency, DependencyLookup};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct DependenciesResponse {
    #[serde(default)]
    dependencies: Vec<DependencyRecord>,
}

#[derive(Debug, Deserialize)]
struct DependencyRecord {
    name: String,
    #[serde(default)]
    requirement: String,
}

/// HttpKnowledgeBase adapter for querying a remote dependency knowledge
/// base over its JSON API.
///
/// This adapter implements the DependencyLookup port with an async reqwest
/// client, so the collector's worker pool can issue parallel queries.
pub struct HttpKnowledgeBase {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl HttpKnowledgeBase {
    /// Creates a new client against the given knowledge-base endpoint
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("deptree/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_retries: 3,
        })
    }

    /// Fetches declared dependencies with retry logic
    async fn fetch_with_retry(
        &self,
        purl_name: &str,
        version: &str,
        ecosystem: &str,
    ) -> Result<DependenciesResponse> {
        let mut last_error = anyhow::anyhow!("knowledge base lookup was never attempted");

        for attempt in 1..=self.max_retries.max(1) {
            match self.fetch(purl_name, version, ecosystem).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = e;
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error)
    }

    /// Validates a URL path component before interpolation
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        // Security: prevent URL injection through package identifiers
        if component.contains('/') && !component.starts_with('@') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    async fn fetch(
        &self,
        purl_name: &str,
        version: &str,
        ecosystem: &str,
    ) -> Result<DependenciesResponse> {
        Self::validate_url_component(purl_name, "Package name")?;
        Self::validate_url_component(version, "Version")?;
        Self::validate_url_component(ecosystem, "Ecosystem")?;

        let encoded_name = urlencoding::encode(purl_name);
        let encoded_version = urlencoding::encode(version);
        let encoded_ecosystem = urlencoding::encode(ecosystem);

        let url = format!(
            "{}/api/v1/dependencies/{}/{}/{}",
            self.base_url, encoded_ecosystem, encoded_name, encoded_version
        );

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            // Unknown package: not an error, just no known dependencies
            return Ok(DependenciesResponse {
                dependencies: vec![],
            });
        }
        if !response.status().is_success() {
            anyhow::bail!(
                "knowledge base returned status code {}",
                response.status()
            );
        }

        let parsed: DependenciesResponse = response.json().await?;
        Ok(parsed)
    }
}

#[async_trait]
impl DependencyLookup for HttpKnowledgeBase {
    async fn get_dependencies(
        &self,
        purl_name: &str,
        version: &str,
        ecosystem: &str,
    ) -> Result<Vec<DeclaredDependency>> {
        let response = self
            .fetch_with_retry(purl_name, version, ecosystem)
            .await?;

        Ok(response
            .dependencies
            .into_iter()
            .map(|r| DeclaredDependency::new(r.name, r.requirement))
            .collect())
    }
}
