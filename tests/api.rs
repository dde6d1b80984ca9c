//! # 조회 API 통합 테스트
//!
//! 서버를 띄우지 않고 `tower::ServiceExt::oneshot`으로 라우터에
//! 요청을 직접 보내 상태 코드와 응답 본문을 검증합니다.
//! 각 테스트는 독립된 인메모리 SQLite DB를 사용합니다.

use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use recipedex::{
    db,
    models::{NewRecipe, Pagination},
    AppState,
};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// 인메모리 DB에 스키마를 만들고 주어진 레시피를 삽입한 풀을 반환합니다.
/// max_connections(1): 인메모리 DB는 연결마다 별도 DB이므로 연결 하나를 공유합니다.
async fn pool_with(recipes: &[NewRecipe]) -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    db::MIGRATOR.run(&pool).await.expect("migrations");
    for recipe in recipes {
        db::insert_recipe(&pool, recipe).await.expect("seed insert");
    }
    pool
}

fn app_with(pool: SqlitePool) -> Router {
    recipedex::app(AppState {
        pool,
        static_dir: "static".to_string(),
    })
}

/// NewRecipe를 소스 JSON과 같은 경로(serde 역직렬화)로 만듭니다.
fn recipe(value: Value) -> NewRecipe {
    serde_json::from_value(value).expect("recipe fixture")
}

/// 검색 테스트용 고정 시드: cuisine/rating/serves가 겹치고 갈리는 4건.
fn sample_recipes() -> Vec<NewRecipe> {
    vec![
        recipe(json!({
            "title": "Chocolate Cake",
            "cuisine": "American",
            "rating": 4.6,
            "total_time": "45 mins",
            "serves": "8",
            "description": "Rich layered cake",
            "cook_time": "30 mins",
            "prep_time": "15 mins",
            "nutrients": {"calories": "420 kcal", "sugar": "38 g"},
            "ingredients": ["flour", "cocoa", "sugar", "eggs"],
            "instructions": ["Mix dry ingredients", "Add eggs", "Bake"]
        })),
        recipe(json!({
            "title": "Pasta Carbonara",
            "cuisine": "Italian",
            "rating": 4.8,
            "total_time": "30 mins",
            "serves": "4",
            "ingredients": ["spaghetti", "eggs", "pancetta"],
            "instructions": ["Boil pasta", "Toss with sauce"]
        })),
        recipe(json!({
            "title": "Tomato Bruschetta",
            "cuisine": "Italian",
            "rating": 4.2,
            "total_time": "15 mins",
            "serves": "4-6",
            "ingredients": ["bread", "tomatoes", "basil"],
            "instructions": ["Toast bread", "Top with tomatoes"]
        })),
        recipe(json!({
            "title": "Pancakes",
            "cuisine": "American",
            "rating": 3.9,
            "total_time": "20 mins",
            "serves": "2",
            "ingredients": ["flour", "milk", "eggs"],
            "instructions": ["Whisk batter", "Fry"]
        })),
    ]
}

/// n건의 번호 붙은 레시피 (페이지네이션 테스트용).
fn numbered_recipes(n: usize) -> Vec<NewRecipe> {
    (1..=n)
        .map(|i| recipe(json!({ "title": format!("Recipe {i:02}"), "cuisine": "Test" })))
        .collect()
}

async fn get_raw(app: Router, uri: &str) -> (StatusCode, Bytes) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(app, uri).await;
    let value = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("non-JSON body for {uri}: {e}"));
    (status, value)
}

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("JSON array response")
        .iter()
        .map(|r| r["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn list_returns_default_page_of_ten() {
    let app = app_with(pool_with(&numbered_recipes(12)).await);
    let (status, body) = get_json(app, "/api/recipes").await;
    assert_eq!(status, StatusCode::OK);
    let titles = titles(&body);
    assert_eq!(titles.len(), 10);
    assert_eq!(titles[0], "Recipe 01");
    assert_eq!(titles[9], "Recipe 10");
}

#[tokio::test]
async fn list_paginates_with_offset() {
    let pool = pool_with(&numbered_recipes(25)).await;

    // page=2 → 자연 순서상 11~20번째 행
    let (status, body) = get_json(app_with(pool.clone()), "/api/recipes?page=2&limit=10").await;
    assert_eq!(status, StatusCode::OK);
    let page2 = titles(&body);
    assert_eq!(page2.first().map(String::as_str), Some("Recipe 11"));
    assert_eq!(page2.last().map(String::as_str), Some("Recipe 20"));

    // 마지막 페이지는 남은 행만 반환
    let (_, body) = get_json(app_with(pool), "/api/recipes?page=3&limit=10").await;
    assert_eq!(titles(&body).len(), 5);
}

#[tokio::test]
async fn list_clamps_nonpositive_page_and_limit() {
    let pool = pool_with(&numbered_recipes(5)).await;

    // page=0은 page=1과 동일하게 처리 (음수 OFFSET 없음)
    let (status, body) = get_json(app_with(pool.clone()), "/api/recipes?page=0&limit=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body)[0], "Recipe 01");

    // limit=0은 최소 1로 클램프
    let (status, body) = get_json(app_with(pool), "/api/recipes?page=1&limit=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body).len(), 1);
}

#[tokio::test]
async fn json_columns_come_back_structured() {
    let app = app_with(pool_with(&sample_recipes()).await);
    let (status, body) = get_json(app, "/api/recipes?limit=1").await;
    assert_eq!(status, StatusCode::OK);

    let first = &body.as_array().unwrap()[0];
    // 문자열이 아니라 구조화된 JSON 값이어야 합니다
    assert!(first["ingredients"].is_array());
    assert!(first["instructions"].is_array());
    assert!(first["nutrients"].is_object());
    assert_eq!(first["ingredients"][0], "flour");
    assert_eq!(first["nutrients"]["calories"], "420 kcal");
}

#[tokio::test]
async fn search_without_params_matches_plain_list() {
    let pool = pool_with(&numbered_recipes(15)).await;

    let (_, plain) = get_json(app_with(pool.clone()), "/api/recipes?page=2&limit=5").await;
    let (_, search) = get_json(app_with(pool), "/api/recipes/search?page=2&limit=5").await;
    assert_eq!(plain, search);
}

#[tokio::test]
async fn search_filters_are_conjunctive() {
    let app = app_with(pool_with(&sample_recipes()).await);
    let (status, body) =
        get_json(app, "/api/recipes/search?cuisine=Italian&rating=4.5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Pasta Carbonara"]);
}

#[tokio::test]
async fn search_title_matches_substring_case_insensitively() {
    let app = app_with(pool_with(&sample_recipes()).await);
    // SQLite LIKE 기본 규칙: ASCII 대소문자 무시.
    // "Chocolate Cake"와 "Pancakes" 모두 부분 문자열 "cake"를 포함합니다.
    let (status, body) = get_json(app, "/api/recipes/search?title=cake").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Chocolate Cake", "Pancakes"]);
}

#[tokio::test]
async fn search_serves_matches_prefix() {
    let app = app_with(pool_with(&sample_recipes()).await);
    // "4"는 "4"와 "4-6"에 접두사로 일치, "2"/"8"에는 불일치
    let (status, body) = get_json(app, "/api/recipes/search?serves=4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Pasta Carbonara", "Tomato Bruschetta"]);
}

#[tokio::test]
async fn search_ignores_empty_params() {
    let pool = pool_with(&sample_recipes()).await;
    let (status, body) =
        get_json(app_with(pool), "/api/recipes/search?title=&cuisine=&serves=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body).len(), 4);
}

#[tokio::test]
async fn title_lookup_returns_single_object() {
    let app = app_with(pool_with(&sample_recipes()).await);
    let (status, body) = get_json(app, "/api/recipes/title/Chocolate%20Cake").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Chocolate Cake");
    assert!(body["nutrients"].is_object());
}

#[tokio::test]
async fn title_lookup_unknown_returns_404_envelope() {
    let app = app_with(pool_with(&sample_recipes()).await);
    let (status, body) = get_json(app, "/api/recipes/title/Nonexistent-Recipe-Name").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Recipe not found" }));
}

#[tokio::test]
async fn cuisine_endpoint_requires_parameter() {
    let pool = pool_with(&sample_recipes()).await;

    let (status, body) = get_json(app_with(pool.clone()), "/api/recipes/cuisine").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Cuisine parameter is required" }));

    // 빈 문자열도 누락으로 취급
    let (status, _) = get_json(app_with(pool), "/api/recipes/cuisine?cuisine=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cuisine_endpoint_filters_and_paginates() {
    let pool = pool_with(&sample_recipes()).await;

    let (status, body) =
        get_json(app_with(pool.clone()), "/api/recipes/cuisine?cuisine=Italian").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Pasta Carbonara", "Tomato Bruschetta"]);

    let (_, body) = get_json(
        app_with(pool),
        "/api/recipes/cuisine?cuisine=Italian&page=2&limit=1",
    )
    .await;
    assert_eq!(titles(&body), vec!["Tomato Bruschetta"]);
}

#[tokio::test]
async fn malformed_numeric_params_return_400_envelope() {
    let pool = pool_with(&sample_recipes()).await;

    // page가 숫자가 아님
    let (status, body) = get_json(app_with(pool.clone()), "/api/recipes?page=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    // rating이 숫자가 아님
    let (status, body) =
        get_json(app_with(pool), "/api/recipes/search?rating=five").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_check_reports_ok() {
    let app = app_with(pool_with(&[]).await);
    let (status, body) = get_json(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn landing_page_is_served_at_root() {
    let app = app_with(pool_with(&[]).await);
    let (status, body) = get_raw(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("<title>Recipedex</title>"));
}

#[tokio::test]
async fn static_assets_are_served_by_path() {
    let app = app_with(pool_with(&[]).await);
    let (status, body) = get_raw(app, "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("loadRecipes"));
}

#[tokio::test]
async fn path_traversal_cannot_escape_static_root() {
    let app = app_with(pool_with(&[]).await);
    // ".."으로 정적 루트를 벗어나려는 요청이 파일 내용을 노출하면 안 됩니다
    let (_, body) = get_raw(app, "/../Cargo.toml").await;
    assert!(!String::from_utf8_lossy(&body).contains("[package]"));
}

#[tokio::test]
async fn pagination_window_covers_exact_rows() {
    // page=P, limit=L이면 자연 순서 [(P-1)*L, P*L) 구간의 행만 반환
    let pool = pool_with(&numbered_recipes(9)).await;
    let (_, body) = get_json(app_with(pool), "/api/recipes?page=2&limit=3").await;
    assert_eq!(
        titles(&body),
        vec!["Recipe 04", "Recipe 05", "Recipe 06"]
    );
}

#[tokio::test]
async fn db_layer_natural_order_is_insertion_order() {
    // 핸들러를 거치지 않는 db 계층 확인: 자연 순서 == 삽입 순서
    let pool = pool_with(&numbered_recipes(3)).await;
    let rows = db::list_recipes(&pool, &Pagination::default()).await.unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
