use serde::{Deserialize, Serialize};

/// An uploaded file, held in memory for the lifetime of one request.
/// The bytes are never decoded; the stub classifier ignores them.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub media_type: String,
    pub data: Vec<u8>,
}

/// Successful classification as sent to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResponse {
    pub is_hotdog: bool,
    pub confidence: f32,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_response_uses_camel_case() {
        let json = serde_json::to_value(ClassificationResponse {
            is_hotdog: true,
            confidence: 0.85,
            filename: "dog.jpg".to_string(),
        })
        .unwrap();

        assert_eq!(json["isHotdog"], true);
        assert_eq!(json["filename"], "dog.jpg");
        assert!(json.get("is_hotdog").is_none());
    }
}
