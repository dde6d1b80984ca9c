//! # 쿼리 스트링 추출자(Extractor)
//!
//! `axum::extract::Query`를 감싼 래퍼입니다. 기본 Query 추출자는 파싱 실패 시
//! 평문(plain text) 400 응답을 반환하는데, 이 API의 모든 에러는
//! `{"error": "<메시지>"}` envelope을 사용하므로 거부(rejection)를
//! [`AppError::BadRequest`]로 변환해 응답 형식을 통일합니다.
//!
//! 예: `GET /api/recipes?page=abc` → 400 + `{"error": "Failed to deserialize ..."}`
//!
//! 핸들러에서는 axum의 Query 대신 이 타입을 사용합니다:
//! ```ignore
//! pub async fn list(Query(page): Query<Pagination>) -> ...
//! ```

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON envelope 거부를 사용하는 Query 추출자.
///
/// 구조 분해 패턴(`Query(params)`)으로 내부 값을 바로 꺼내 쓸 수 있도록
/// 튜플 구조체(newtype)로 정의합니다.
#[derive(Debug, Clone, Copy)]
pub struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // 실제 파싱은 axum의 Query에 위임하고, 실패 메시지만 가져와
        // BadRequest(400 + JSON envelope)로 바꿔 반환합니다.
        let axum::extract::Query(value) =
            axum::extract::Query::<T>::try_from_uri(&parts.uri)
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Query(value))
    }
}
