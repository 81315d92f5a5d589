//! Document search over the university knowledge-base index.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::{ChatError, Result};
use crate::tools::{Tool, ToolArguments, ToolParameters};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const MAX_RESULTS: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Tool that searches a fixed vector-store index of university documents
/// (website content: faculty, programs, facilities, fees, policies).
pub struct DocumentSearchTool {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    vector_store_id: String,
    parameters: ToolParameters,
}

impl DocumentSearchTool {
    pub fn new(
        api_key: impl Into<String>,
        vector_store_id: impl Into<String>,
        base_url: Option<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            vector_store_id: vector_store_id.into(),
            parameters: ToolParameters::object()
                .string("query", "Natural-language search query over university documents", true)
                .build(),
        })
    }
}

#[async_trait]
impl Tool for DocumentSearchTool {
    fn name(&self) -> &str {
        "search_documents"
    }

    fn description(&self) -> &str {
        "Search the university knowledge base (website data) for general facts: \
         faculty members, academic programs, facilities, tuition fees, contact \
         information, policies, history, mission, and structure."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(&self, args: &ToolArguments) -> Result<serde_json::Value> {
        let query = args.get_str("query")?;
        let url = format!("{}/vector_stores/{}/search", self.base_url, self.vector_store_id);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("OpenAI-Beta", "assistants=v2")
            .json(&json!({ "query": query, "max_num_results": MAX_RESULTS }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::api(status.as_u16(), body));
        }

        let results: SearchResponse = response.json().await?;
        let hits: Vec<serde_json::Value> = results
            .data
            .into_iter()
            .map(|hit| {
                let text = hit
                    .content
                    .into_iter()
                    .filter_map(|c| c.text)
                    .collect::<Vec<_>>()
                    .join("\n");
                json!({ "filename": hit.filename, "score": hit.score, "text": text })
            })
            .collect();
        Ok(json!(hits))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    filename: Option<String>,
    score: Option<f64>,
    #[serde(default)]
    content: Vec<SearchChunk>,
}

#[derive(Debug, Deserialize)]
struct SearchChunk {
    text: Option<String>,
}
