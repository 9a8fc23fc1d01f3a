/*
 * Responsibility
 * - /api 配下の URL 構造を定義
 * - 現状は /test のみ (GET)
 */
use axum::{Router, routing::get};

use crate::api::handlers::test::test;

pub fn routes() -> Router {
    Router::new().route("/test", get(test))
}
