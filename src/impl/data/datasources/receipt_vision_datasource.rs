use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use fractic_server_error::ServerError;
use serde_json::json;

use crate::{
    config::VisionConfig,
    data::models::gemini_model::{
        Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData,
        Part,
    },
    errors::{ExtractionError, VisionClientInit},
};

pub(crate) const RECEIPT_INSTRUCTION: &str = "Analyze this receipt image and extract its data: \
    the merchant name (merchant), the date (date, YYYY-MM-DD format), the total amount (total, \
    numbers only), and the most fitting category (category) among: Meals, Travel, Equipment, \
    Software, Office, Other. Also extract the list of purchased items (items).";

/// External vision service able to read a receipt image.
///
/// Implementations return the raw JSON text of the structured record; schema
/// checks happen in the repository.
#[async_trait]
pub trait ReceiptVisionDatasource: Send + Sync {
    async fn extract(&self, image: &[u8], mime_type: &str) -> Result<String, ServerError>;
}

pub struct GeminiVisionDatasource {
    http: reqwest::Client,
    config: VisionConfig,
}

impl GeminiVisionDatasource {
    pub fn new(config: VisionConfig) -> Result<Self, ServerError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("gigpilot/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| VisionClientInit::with_debug(&e))?;
        Ok(Self { http, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base, self.config.model
        )
    }

    pub(crate) fn build_request(image: &[u8], mime_type: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: mime_type.to_string(),
                            data: STANDARD.encode(image),
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some(RECEIPT_INSTRUCTION.to_string()),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: receipt_schema(),
            },
        }
    }
}

fn receipt_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "merchant": { "type": "STRING" },
            "date": { "type": "STRING" },
            "total": { "type": "NUMBER" },
            "category": { "type": "STRING" },
            "items": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "price": { "type": "NUMBER" }
                    }
                }
            }
        },
        "required": ["merchant", "total", "category"]
    })
}

#[async_trait]
impl ReceiptVisionDatasource for GeminiVisionDatasource {
    async fn extract(&self, image: &[u8], mime_type: &str) -> Result<String, ServerError> {
        let request = Self::build_request(image, mime_type);
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ExtractionError::with_debug("request to vision service failed", &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractionError::with_debug(
                &format!("vision service returned HTTP {}", status.as_u16()),
                &body,
            ));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| ExtractionError::with_debug("unreadable vision service response", &e))?
            .first_text()
            .ok_or_else(|| ExtractionError::new("no response text from vision service"))
    }
}
