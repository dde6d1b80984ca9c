//! # Recipedex
//!
//! 레시피 데이터셋을 작은 HTTP API로 제공하는 서비스입니다.
//! SQLite 테이블 하나를 공유하는 두 실행 파일로 구성됩니다:
//! - `recipedex` (src/main.rs): 읽기 전용 조회 API + 정적 파일 서버
//! - `load_recipes` (src/bin/load_recipes.rs): JSON 문서를 테이블에 적재
//!
//! 이 lib.rs는 모듈을 선언하고, 서버와 통합 테스트가 공유하는
//! 라우터 조립 함수 [`app`]을 제공합니다.

pub mod config;
pub mod db;
pub mod error;
pub mod loader;
pub mod middleware;
pub mod models;
pub mod routes;

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub use routes::AppState;

/// 애플리케이션 라우터를 조립합니다.
///
/// main.rs와 통합 테스트가 같은 라우터를 쓰도록 이 함수 하나로 모았습니다.
///
/// 라우터 구성:
/// - `/api/*`: 레시피 조회 API (routes/ 모듈의 핸들러)
/// - 그 외 경로: `state.static_dir` 아래의 정적 파일
///   (경로 탈출(`..`) 차단은 ServeDir가 처리합니다)
///
/// 정적 디렉토리가 없으면 경고를 남기고 API만 서빙합니다.
pub fn app(state: AppState) -> Router {
    // 레시피 API 라우트
    // 주의: /recipes/search 와 /recipes/cuisine 은 리터럴 경로라서
    //       /recipes/title/{title} 의 캡처와 충돌하지 않습니다.
    let api_routes = Router::new()
        .route("/recipes", get(routes::list_recipes))
        .route("/recipes/search", get(routes::search_recipes))
        .route("/recipes/title/{title}", get(routes::get_recipe_by_title))
        .route("/recipes/cuisine", get(routes::list_recipes_by_cuisine))
        .route("/health", get(routes::health_check))
        .with_state(state.clone());

    // CORS: 브라우저의 보안 정책. 개발 환경에서는 모두 허용으로 설정합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = Path::new(&state.static_dir);
    if static_dir.exists() {
        // ServeDir: 디렉토리의 파일을 HTTP로 서빙하는 서비스.
        // "/"는 index.html로, 없는 경로도 index.html로 돌려보냅니다.
        let serve_dir = ServeDir::new(static_dir)
            .not_found_service(ServeFile::new(static_dir.join("index.html")));

        Router::new()
            .nest("/api", api_routes)
            .fallback_service(serve_dir)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    } else {
        tracing::warn!(
            "Static directory '{}' not found, serving API only",
            state.static_dir
        );

        Router::new()
            .nest("/api", api_routes)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }
}
