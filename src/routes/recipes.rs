//! # 레시피 라우트 핸들러
//!
//! 레시피 조회 API의 HTTP 핸들러 함수들입니다. 전부 읽기 전용입니다.
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | GET | /api/recipes?page&limit | 전체 목록 (자연 순서, 페이지 단위) |
//! | GET | /api/recipes/search?title&cuisine&rating&total_time&serves&page&limit | 조건 검색 |
//! | GET | /api/recipes/title/{title} | 제목 정확 일치 단건 조회 |
//! | GET | /api/recipes/cuisine?cuisine&page&limit | cuisine 일치 목록 |
//!
//! ## Axum 핸들러 패턴
//! 핸들러는 **Extractor(추출기)**를 매개변수로 받습니다:
//! - `State(state)`: 앱 전역 상태 (DB 풀)
//! - `Path(title)`: URL 경로 파라미터
//! - `Query(params)`: 쿼리 스트링 — axum 기본 Query가 아니라
//!   crate::middleware::Query(거부를 JSON envelope 400으로 변환)를 씁니다.
//!
//! 반환 타입이 `Result<T, AppError>`이면, Axum이 자동으로:
//! - `Ok(T)` → T를 HTTP 응답으로 변환 (IntoResponse 트레이트 사용)
//! - `Err(AppError)` → `{"error": "..."}` 에러 응답으로 변환

use crate::{
    db,
    error::AppError,
    middleware::Query,
    models::{Pagination, Recipe, RecipeFilter},
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 풀이 복제되지 않고,
/// 각 쿼리는 풀에서 연결을 빌렸다가 끝나면 반납합니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (내부적으로 Arc로 공유)
    pub pool: SqlitePool,
    /// 정적 파일(랜딩 페이지, 에셋) 디렉토리 경로
    pub static_dir: String,
}

/// `GET /api/recipes` — 전체 레시피를 페이지 단위로 조회합니다.
///
/// `page`(기본 1)와 `limit`(기본 10)로 구간을 정하며,
/// 응답은 래핑 없는 JSON 배열입니다.
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let recipes = db::list_recipes(&state.pool, &page).await?;
    Ok(Json(recipes))
}

/// `GET /api/recipes/search` — 조건을 AND로 결합하여 검색합니다.
///
/// # Extractor
/// 필터와 페이지네이션을 별도의 Query 추출자로 받습니다.
/// (serde flatten은 쿼리 스트링의 숫자 필드와 조합이 나빠 쓰지 않습니다)
///
/// 모든 필터가 생략되면 `GET /api/recipes`와 동일하게 동작합니다.
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(filter): Query<RecipeFilter>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let recipes = db::search_recipes(&state.pool, &filter, &page).await?;
    Ok(Json(recipes))
}

/// `GET /api/recipes/title/{title}` — 제목이 정확히 일치하는 레시피 한 건.
///
/// # Extractor
/// - `Path(title)`: URL의 `{title}` 부분을 String으로 추출합니다.
///   퍼센트 인코딩(`%20` 등)은 axum이 디코딩해 줍니다.
///
/// 일치하는 행이 없으면 404 + `{"error": "Recipe not found"}`.
pub async fn get_recipe_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = db::get_recipe_by_title(&state.pool, &title)
        .await?
        // .ok_or_else(): Option이 None이면 지정한 에러를 반환합니다.
        .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))?;
    Ok(Json(recipe))
}

/// `GET /api/recipes/cuisine`의 쿼리 파라미터.
///
/// cuisine을 Option으로 받는 이유: 누락 시 추출 단계에서 실패시키지 않고
/// 핸들러 안에서 명시적인 400 메시지로 변환하기 위해서입니다.
#[derive(Debug, Deserialize)]
pub struct CuisineParams {
    pub cuisine: Option<String>,
}

/// `GET /api/recipes/cuisine` — cuisine이 정확히 일치하는 레시피 목록.
///
/// `cuisine` 파라미터가 없거나 빈 문자열이면
/// 400 + `{"error": "Cuisine parameter is required"}`.
pub async fn list_recipes_by_cuisine(
    State(state): State<AppState>,
    Query(params): Query<CuisineParams>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let cuisine = params
        .cuisine
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("Cuisine parameter is required".to_string()))?;

    let recipes = db::list_recipes_by_cuisine(&state.pool, cuisine, &page).await?;
    Ok(Json(recipes))
}
