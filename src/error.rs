//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 `{"error": "<메시지>"}` HTTP 응답으로 자동 변환
//!
//! 응답 본문은 모든 에러에서 동일한 평탄한 envelope을 사용합니다.
//! 클라이언트 입력 오류(400, 404)는 메시지를 그대로 내보내고,
//! 서버 내부 오류(500)는 로그에만 기록하고 일반적인 메시지로 대체합니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 각 에러 variant는 적절한 HTTP 상태 코드와 메시지로 변환됩니다.
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    /// 메시지는 엔드포인트가 지정합니다. 예: "Recipe not found"
    #[error("{0}")]
    NotFound(String),

    /// 잘못된 요청 (HTTP 400)
    /// 필수 파라미터 누락, 숫자 파라미터 형식 오류 등이 여기로 모입니다.
    #[error("{0}")]
    BadRequest(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from]: sqlx::Error → AppError::Database 자동 변환.
    /// sqlx 호출에 `?`만 붙이면 됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 저장된 JSON 컬럼이 파싱되지 않음 (HTTP 500)
    /// nutrients/ingredients/instructions 컬럼이 비어 있지 않은데
    /// 올바른 JSON이 아닌 경우에만 발생합니다.
    #[error("Invalid JSON in stored column: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 내부 에러(Database, Json)는 실제 에러 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다 (내부 구현 노출 방지).
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            AppError::Json(ref e) => {
                tracing::error!("Stored JSON column failed to parse: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        // 결과: { "error": "Recipe not found" }
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
