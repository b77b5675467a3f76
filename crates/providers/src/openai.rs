use crate::{DescribeRequest, DescriptionProvider, ProviderError};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
}

#[derive(Clone)]
pub struct OpenAiProvider {
    client: Client,
    cfg: Arc<OpenAiConfig>,
}

impl OpenAiProvider {
    pub fn new(cfg: OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            cfg: Arc::new(cfg),
        }
    }
}

fn build_prompt(request: &DescribeRequest) -> String {
    format!(
        "Analyze this file operation and provide a brief, informative description:\n\n\
         Action: {}\n\
         Filename: {}\n\
         File extension: {}\n\
         File size: {} bytes\n\
         Old name: {}\n\
         New name: {}\n\n\
         Provide a concise description (max 100 words) of what this file likely \
         contains and the action performed.",
        request.action,
        request
            .new_name
            .as_deref()
            .or(request.old_name.as_deref())
            .unwrap_or(&request.path),
        request.extension.as_deref().unwrap_or(""),
        request.size,
        request.old_name.as_deref().unwrap_or("N/A"),
        request.new_name.as_deref().unwrap_or("N/A"),
    )
}

#[async_trait::async_trait]
impl DescriptionProvider for OpenAiProvider {
    async fn describe(&self, request: &DescribeRequest) -> Result<String, ProviderError> {
        #[derive(serde::Serialize)]
        struct ChatMessage<'a> {
            role: &'static str,
            content: &'a str,
        }
        #[derive(serde::Serialize)]
        struct ChatRequest<'a> {
            model: &'a str,
            messages: Vec<ChatMessage<'a>>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: ChatMessageResp,
        }
        #[derive(Deserialize)]
        struct ChatMessageResp {
            content: String,
        }
        #[derive(Deserialize)]
        struct ChatApiResponse {
            choices: Vec<Choice>,
        }

        let prompt = build_prompt(request);
        let body = ChatRequest {
            model: &self.cfg.chat_model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
        };

        let resp = self
            .client
            .post(format!("{}/v1/chat/completions", self.cfg.base_url))
            .bearer_auth(&self.cfg.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let parsed: ChatApiResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(ProviderError::RequestFailed("empty completion".into()));
        }
        Ok(content)
    }
}
