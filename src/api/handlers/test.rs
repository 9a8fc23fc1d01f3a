/*
 * Responsibility
 * - GET /api/test (疎通確認用)
 * - request は一切読まない。常に 200 + 固定 message
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::dto::response::ApiResponse;

pub const SUCCESS_MESSAGE: &str = "REQUEST SUCCESS.";

pub async fn test() -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::success(SUCCESS_MESSAGE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_200_with_success_message() {
        let response = test().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#"{"message":"REQUEST SUCCESS."}"#);
    }
}
