use crate::{config, FetchOutcome, QueryMode, StoreClient, SubmitOutcome};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::fmt;
use std::time::Duration;
use tracing::warn;
use wex_model::{StoreDocument, Wellbore, WellboreFilter};

/// One configured store endpoint. Passed explicitly into the client
/// constructor; there is no process-wide provider.
#[derive(Clone)]
pub struct ServerConfig {
    pub url: String,
    pub name: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("url", &self.url)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"******")
            .finish()
    }
}

pub struct HttpStoreClient {
    config: ServerConfig,
    client: Client,
}

impl HttpStoreClient {
    pub fn new(config: ServerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config::http_timeout())
            .build()
            .context("building store http client")?;
        Ok(Self { config, client })
    }

    async fn post(&self, path: &str, payload: serde_json::Value) -> Result<String> {
        let url = format!("{}/{}", self.config.url.trim_end_matches('/'), path);
        let retry_limit = config::http_retry_limit();
        for attempt in 0..=retry_limit {
            match self
                .client
                .post(&url)
                .basic_auth(&self.config.username, Some(&self.config.password))
                .json(&payload)
                .send()
                .await
            {
                Ok(resp) => {
                    let status = resp.status();
                    let body = resp
                        .text()
                        .await
                        .with_context(|| format!("reading {} reply from {}", path, self.config.name))?;
                    if !status.is_success() {
                        bail!("store {} responded {}: {}", self.config.name, status, body);
                    }
                    return Ok(body);
                }
                Err(err) => {
                    if attempt < retry_limit {
                        warn!(
                            target: "client::http",
                            "retrying {} request to {} attempt {} due to {}",
                            path,
                            self.config.name,
                            attempt + 1,
                            err
                        );
                        tokio::time::sleep(Duration::from_millis(200 * (attempt as u64 + 1))).await;
                        continue;
                    } else {
                        return Err(err)
                            .with_context(|| format!("{} request to store {}", path, self.config.name));
                    }
                }
            }
        }
        Err(anyhow::anyhow!(
            "store retries exhausted for {}",
            self.config.name
        ))
    }
}

#[async_trait]
impl StoreClient for HttpStoreClient {
    fn server_name(&self) -> String {
        self.config.name.clone()
    }

    async fn fetch_wellbores(
        &self,
        filter: &WellboreFilter,
        mode: QueryMode,
    ) -> Result<FetchOutcome<Wellbore>> {
        let payload = json!({
            "object": "wellbore",
            "return_elements": mode.as_param(),
            "filter": filter,
        });
        let body = self.post("query", payload).await?;
        let reply: QueryReply<Wellbore> =
            serde_json::from_str(&body).context("parsing store query reply")?;
        Ok(FetchOutcome {
            success: reply.is_success(),
            items: reply.items,
        })
    }

    async fn submit(&self, document: &StoreDocument) -> Result<SubmitOutcome> {
        let payload = serde_json::to_value(document).context("encoding store document")?;
        let body = self.post("store", payload).await?;
        let reply: SubmitReply = serde_json::from_str(&body).context("parsing store submit reply")?;
        Ok(SubmitOutcome {
            success: reply.is_success(),
            reason: reply.reason,
        })
    }
}

#[derive(Debug, Deserialize)]
struct QueryReply<T> {
    result: String,
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

impl<T> QueryReply<T> {
    fn is_success(&self) -> bool {
        self.result == "success"
    }
}

#[derive(Debug, Deserialize)]
struct SubmitReply {
    result: String,
    #[serde(default)]
    reason: Option<String>,
}

impl SubmitReply {
    fn is_success(&self) -> bool {
        self.result == "success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_reply_parses_matches() {
        let body = r#"{
            "result": "success",
            "items": [
                { "uid": "WB-1", "name": "B-2 H", "well_uid": "W-1", "well_name": "NO 34/10-A" }
            ]
        }"#;
        let reply: QueryReply<Wellbore> = serde_json::from_str(body).expect("parse reply");
        assert!(reply.is_success());
        assert_eq!(reply.items.len(), 1);
        assert_eq!(reply.items[0].well_name, "NO 34/10-A");
    }

    #[test]
    fn query_reply_empty_match_is_still_success() {
        let body = r#"{ "result": "success" }"#;
        let reply: QueryReply<Wellbore> = serde_json::from_str(body).expect("parse reply");
        assert!(reply.is_success());
        assert!(reply.items.is_empty());
    }

    #[test]
    fn submit_reply_carries_rejection_reason() {
        let body = r#"{ "result": "failure", "reason": "duplicate uid" }"#;
        let reply: SubmitReply = serde_json::from_str(body).expect("parse reply");
        assert!(!reply.is_success());
        assert_eq!(reply.reason.as_deref(), Some("duplicate uid"));
    }

    #[test]
    fn server_config_debug_redacts_password() {
        let config = ServerConfig {
            url: "https://store.example.com".into(),
            name: "store.example.com".into(),
            username: "operator".into(),
            password: "hunter2".into(),
        };
        let printed = format!("{:?}", config);
        assert!(printed.contains("operator"));
        assert!(!printed.contains("hunter2"));
    }
}
