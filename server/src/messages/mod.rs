// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! HTTP request and response bodies

use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// Body of `POST /chat`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    /// Student's message
    pub message: String,
}

impl ChatRequest {
    /// Reject requests the agent should never see.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.message.is_empty() {
            return Err(ClientError::EmptyField("message"));
        }
        Ok(())
    }
}

/// Reply to `POST /chat`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    /// Agent's response, empty when the agent has nothing to say
    pub response: String,
}

/// Reply to `GET /health`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_owned(),
        }
    }
}

/// Body of every error reply
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_deserialize_works() {
        let parsed: ChatRequest = serde_json::from_str(r#"{"message": "hello"}"#).unwrap();
        assert_eq!(parsed.message, "hello");
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn chat_request_requires_message() {
        assert!(serde_json::from_str::<ChatRequest>("{}").is_err());
        assert!(serde_json::from_str::<ChatRequest>(r#"{"message": 5}"#).is_err());
    }

    #[test]
    fn empty_message_fails_validation() {
        let req = ChatRequest {
            message: String::new(),
        };
        assert!(matches!(
            req.validate(),
            Err(ClientError::EmptyField("message"))
        ));
    }

    #[test]
    fn whitespace_message_passes_validation() {
        // Only the empty string is rejected; the classifier handles the rest
        let req = ChatRequest {
            message: "   ".to_owned(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn health_response_default() {
        let json = serde_json::to_value(HealthResponse::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "healthy" }));
    }
}
