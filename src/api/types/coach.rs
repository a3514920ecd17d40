//! Coaching endpoint request/response types

use serde::{Deserialize, Serialize};

use crate::domain::coach::UserContext;

/// POST /v1/coach request body
#[derive(Debug, Clone, Deserialize)]
pub struct CoachingRequest {
    pub message: String,
    pub context: UserContext,
}

/// POST /v1/coach response body
#[derive(Debug, Clone, Serialize)]
pub struct CoachingResponse {
    pub success: bool,
    pub response: String,
}

impl CoachingResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            success: true,
            response: response.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let json = r#"{
            "message": "how do I save more?",
            "context": {
                "pillars": [
                    {"name": "Financial", "value": 40, "goal": 80},
                    {"name": "Health", "value": 50, "goal": 80},
                    {"name": "Relationships", "value": 60, "goal": 80},
                    {"name": "Growth", "value": 70, "goal": 80},
                    {"name": "Purpose", "value": 80, "goal": 80}
                ]
            }
        }"#;

        let request: CoachingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.message, "how do I save more?");
        assert_eq!(request.context.pillars.len(), 5);
    }

    #[test]
    fn test_response_serialization() {
        let json = serde_json::to_string(&CoachingResponse::new("do this")).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"response\":\"do this\""));
    }
}
