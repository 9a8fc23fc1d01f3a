/*
 * Responsibility
 * - API 共通の response envelope ({"message": ...})
 * - 生成は success() のみ。生成後は変更不可
 */
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    message: String,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    // Only read back in tests; the handler hands the envelope straight to Json.
    #[allow(dead_code)]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_keeps_message_as_given() {
        for text in ["REQUEST SUCCESS.", "", "  spaced  ", "日本語", "line\nbreak"] {
            assert_eq!(ApiResponse::success(text).message(), text);
        }
    }

    #[test]
    fn serializes_to_single_message_field() {
        let body = serde_json::to_string(&ApiResponse::success("ok")).unwrap();
        assert_eq!(body, r#"{"message":"ok"}"#);
    }

    #[test]
    fn escapes_message_in_json() {
        let value = serde_json::to_value(ApiResponse::success("say \"hi\"")).unwrap();
        assert_eq!(value, serde_json::json!({ "message": "say \"hi\"" }));
    }
}
