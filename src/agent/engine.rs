//! Reasoning engine: the capability-injection point for the agent's
//! tool-selection loop.
//!
//! The engine decides which tools to call, in what order, how many times.
//! This crate only hands it a registry of named callables with schemas; the
//! concrete engine is replaceable (tests inject a scripted one).

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::error::{ChatError, Result};
use crate::tools::{validate_arguments, Tool, ToolArguments};

use super::AgentMessage;

/// Abstract reasoning engine.
///
/// Given policy instructions, a transcript, and a tool registry, produce the
/// final natural-language answer. Zero or more tool invocations happen inside.
#[async_trait]
pub trait ReasoningEngine: Send + Sync {
    async fn run(
        &self,
        instructions: &str,
        transcript: &[AgentMessage],
        tools: &[Arc<dyn Tool>],
    ) -> Result<String>;
}

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";
const TEMPERATURE: f64 = 0.5;
const MAX_TOKENS: u32 = 20_000;

/// Request timeout for the LLM API.
const REQUEST_TIMEOUT_SECS: u64 = 200;

/// Cap on model round trips within one run.
const MAX_TOOL_ITERATIONS: usize = 8;

/// Chat Completions engine with a tool loop.
///
/// Tool calls returned by the model are validated, executed, and fed back as
/// tool results (failures included, so the model can recover by trying
/// another tool or answering without it) until the model produces a final
/// text response.
pub struct OpenAiEngine {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiEngine {
    pub fn new(api_key: impl Into<String>, base_url: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(val) = HeaderValue::from_str(&format!("Bearer {}", self.api_key)) {
            headers.insert(AUTHORIZATION, val);
        }
        headers
    }

    async fn completion(&self, body: &serde_json::Value) -> Result<serde_json::Value> {
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::api(status.as_u16(), body));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ReasoningEngine for OpenAiEngine {
    async fn run(
        &self,
        instructions: &str,
        transcript: &[AgentMessage],
        tools: &[Arc<dyn Tool>],
    ) -> Result<String> {
        let mut messages: Vec<serde_json::Value> =
            vec![json!({ "role": "system", "content": instructions })];
        messages.extend(
            transcript
                .iter()
                .map(|m| json!({ "role": m.role, "content": m.content })),
        );

        let tool_defs: Vec<serde_json::Value> = tools
            .iter()
            .map(|t| {
                json!({
                    "type": "function",
                    "function": {
                        "name": t.name(),
                        "description": t.description(),
                        "parameters": t.parameters().schema,
                    }
                })
            })
            .collect();

        for iteration in 0..MAX_TOOL_ITERATIONS {
            let mut body = json!({
                "model": self.model,
                "messages": messages,
                "temperature": TEMPERATURE,
                "max_tokens": MAX_TOKENS,
            });
            if !tool_defs.is_empty() {
                body["tools"] = json!(tool_defs);
            }

            debug!(iteration, "reasoning engine round trip");
            let raw = self.completion(&body).await?;
            let message_value = raw
                .pointer("/choices/0/message")
                .cloned()
                .ok_or_else(|| ChatError::Agent("no choices in model response".to_string()))?;
            let message: ChoiceMessage = serde_json::from_value(message_value.clone())?;

            let tool_calls = message.tool_calls.unwrap_or_default();
            if tool_calls.is_empty() {
                return message
                    .content
                    .ok_or_else(|| ChatError::Agent("model returned no content".to_string()));
            }

            // Echo the assistant turn (with its tool calls) back verbatim.
            messages.push(message_value);

            for call in &tool_calls {
                let content = match execute_tool_call(call, tools).await {
                    Ok(value) => value.to_string(),
                    Err(message) => {
                        warn!(tool = %call.function.name, error = %message, "tool call failed");
                        json!({ "error": message }).to_string()
                    }
                };
                messages.push(json!({
                    "role": "tool",
                    "tool_call_id": call.id,
                    "content": content,
                }));
            }
        }

        Err(ChatError::Agent("tool loop exceeded maximum iterations".to_string()))
    }
}

async fn execute_tool_call(
    call: &ToolCall,
    tools: &[Arc<dyn Tool>],
) -> std::result::Result<serde_json::Value, String> {
    let tool = tools
        .iter()
        .find(|t| t.name() == call.function.name)
        .ok_or_else(|| format!("tool '{}' not found", call.function.name))?;

    let args = parse_call_arguments(&call.function.arguments);
    validate_arguments(&args, &tool.parameters().schema)?;
    tool.execute(&ToolArguments::new(args))
        .await
        .map_err(|e| e.to_string())
}

/// Tool call arguments arrive as a JSON-encoded string; an empty or
/// unparseable string degrades to an empty object.
fn parse_call_arguments(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| json!({}))
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    id: String,
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    name: String,
    arguments: String,
}
