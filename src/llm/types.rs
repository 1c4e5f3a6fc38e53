//! Chat-completions wire types.
//!
//! The request structures serialize to the exact JSON the OpenAI-style
//! endpoint expects; the response structures deserialize tolerantly,
//! keeping only the fields this client consumes.

use serde::{Deserialize, Serialize};

/// Request body for `POST {host}/v1/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// One logical message with an ordered sequence of content parts.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

/// A single content part, tagged by `type` on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Successful response body. Only `choices[0].message.content` is
/// consumed; everything else the server sends is ignored.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

/// Error body on a non-2xx status. Both levels are optional — servers
/// are not required to send a structured error.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_the_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: "Summarize: hello".to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: "data:image/png;base64,AA==".to_string(),
                        },
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: "data:image/jpeg;base64,BB==".to_string(),
                        },
                    },
                ],
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4o-mini",
                "messages": [{
                    "role": "user",
                    "content": [
                        { "type": "text", "text": "Summarize: hello" },
                        { "type": "image_url", "image_url": { "url": "data:image/png;base64,AA==" } },
                        { "type": "image_url", "image_url": { "url": "data:image/jpeg;base64,BB==" } }
                    ]
                }]
            })
        );
    }

    #[test]
    fn response_parses_with_extra_fields_present() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1,
            "model": "gpt-4o-mini",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": "done" },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "total_tokens": 3 }
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, "done");
    }

    #[test]
    fn error_body_levels_are_optional() {
        let parsed: ApiErrorBody = serde_json::from_str(r#"{"error":{}}"#).unwrap();
        assert!(parsed.error.unwrap().message.is_none());

        let parsed: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(parsed.error.is_none());
    }
}
