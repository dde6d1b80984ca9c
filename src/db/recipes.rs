//! # 레시피 데이터베이스 쿼리 모듈
//!
//! `recipes` 테이블에 대한 조회/검색/삽입 쿼리 함수들이 정의되어 있습니다.
//!
//! 모든 함수는 `async`이며 `SqlitePool`(또는 트랜잭션)을 받아
//! 데이터베이스와 상호작용합니다. 에러 발생 시 `AppError`를 반환합니다.
//!
//! ## JSON 컬럼 경계 규칙
//! 조회 함수는 결과를 먼저 [`RecipeRow`](crate::models::RecipeRow)(원시 행)로
//! 받은 뒤 반환 직전에 [`Recipe`](crate::models::Recipe)로 디코딩합니다.
//! 삽입 함수는 반대로 구조화된 값을 바인딩 직전에 JSON 문자열로 인코딩합니다.
//! 직렬화된 문자열이 이 모듈 바깥으로 나가는 일은 없습니다.

use crate::error::AppError;
use crate::models::{NewRecipe, Pagination, Recipe, RecipeFilter, RecipeRow};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// 모든 조회 쿼리가 공유하는 SELECT 컬럼 목록.
/// `SELECT *` 대신 명시하여 컬럼 순서 변경에 영향을 받지 않게 합니다.
const RECIPE_COLUMNS: &str = "id, title, cuisine, rating, total_time, serves, \
     description, cook_time, prep_time, nutrients, ingredients, instructions";

/// RecipeRow 목록을 Recipe 목록으로 일괄 디코딩합니다.
///
/// 한 행이라도 저장된 JSON 컬럼이 파싱되지 않으면 전체가 실패합니다
/// (serde_json::Error → AppError::Json 변환은 error.rs의 #[from]이 처리).
fn decode_rows(rows: Vec<RecipeRow>) -> Result<Vec<Recipe>, AppError> {
    let recipes = rows
        .into_iter()
        .map(RecipeRow::into_recipe)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(recipes)
}

/// 전체 레시피를 자연 순서(natural row order)대로 페이지 단위로 조회합니다.
///
/// ORDER BY를 걸지 않으므로 저장소의 내부 저장 순서가 곧 응답 순서입니다.
/// SQLite에서는 실질적으로 rowid(= 삽입 순서) 오름차순입니다.
///
/// # 매개변수
/// - `pool`: SQLite 연결 풀의 참조. 소유권을 가져가지 않고 빌려 씁니다.
/// - `page`: LIMIT/OFFSET으로 변환되는 페이지네이션 파라미터
pub async fn list_recipes(
    pool: &SqlitePool,
    page: &Pagination,
) -> Result<Vec<Recipe>, AppError> {
    let rows = sqlx::query_as::<_, RecipeRow>(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes LIMIT ? OFFSET ?"
    ))
    // SQL의 `?`는 파라미터 바인딩 자리표시자입니다.
    // .bind()로 값을 안전하게 대입하며, 이 방식은 SQL 인젝션을 방지합니다.
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    decode_rows(rows)
}

/// 필터 조건을 AND로 결합하여 레시피를 검색합니다.
///
/// 술어(predicate) 절은 `QueryBuilder`로 순서대로 조립하며, 사용자 입력은
/// 전부 `push_bind`로 바인딩합니다. 문자열 연결로 SQL을 만들지 않습니다.
///
/// 각 필터의 의미 ([`RecipeFilter`] 참고):
/// - `title`: 부분 문자열 일치. SQLite LIKE의 기본 규칙상 ASCII는 대소문자 무시
/// - `cuisine`: 정확히 일치
/// - `rating`: 임계값 이상 (`rating >= ?`)
/// - `total_time`: 정확히 일치
/// - `serves`: 접두사 일치 (`LIKE 'serves%'`)
///
/// 생략되거나 빈 문자열인 파라미터는 조건을 걸지 않습니다.
/// 모든 파라미터가 생략되면 [`list_recipes`]와 동일한 결과가 됩니다.
pub async fn search_recipes(
    pool: &SqlitePool,
    filter: &RecipeFilter,
    page: &Pagination,
) -> Result<Vec<Recipe>, AppError> {
    // WHERE 1=1: 이후의 모든 절을 " AND ..."로 균일하게 붙이기 위한 시작점
    let mut query: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE 1=1"));

    // .filter(|s| !s.is_empty()): 빈 문자열 파라미터는 "조건 없음"으로 취급
    if let Some(title) = filter.title.as_deref().filter(|s| !s.is_empty()) {
        query.push(" AND title LIKE ");
        query.push_bind(format!("%{title}%"));
    }
    if let Some(cuisine) = filter.cuisine.as_deref().filter(|s| !s.is_empty()) {
        query.push(" AND cuisine = ");
        query.push_bind(cuisine);
    }
    if let Some(rating) = filter.rating {
        query.push(" AND rating >= ");
        query.push_bind(rating);
    }
    if let Some(total_time) = filter.total_time.as_deref().filter(|s| !s.is_empty()) {
        query.push(" AND total_time = ");
        query.push_bind(total_time);
    }
    if let Some(serves) = filter.serves.as_deref().filter(|s| !s.is_empty()) {
        query.push(" AND serves LIKE ");
        query.push_bind(format!("{serves}%"));
    }

    query.push(" LIMIT ");
    query.push_bind(page.limit());
    query.push(" OFFSET ");
    query.push_bind(page.offset());

    let rows = query
        .build_query_as::<RecipeRow>()
        .fetch_all(pool)
        .await?;

    decode_rows(rows)
}

/// 제목이 정확히 일치하는 레시피 한 건을 조회합니다.
///
/// 제목은 유일성이 보장되지 않으므로, 여러 건이 일치하면 자연 순서상
/// 첫 번째 행을 반환합니다.
///
/// # 반환값
/// - `Ok(Some(Recipe))`: 일치하는 레시피를 찾은 경우
/// - `Ok(None)`: 일치하는 행이 없는 경우 (핸들러에서 404로 변환)
pub async fn get_recipe_by_title(
    pool: &SqlitePool,
    title: &str,
) -> Result<Option<Recipe>, AppError> {
    let row = sqlx::query_as::<_, RecipeRow>(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes WHERE title = ? LIMIT 1"
    ))
    .bind(title)
    // .fetch_optional(): 결과가 0행이면 None, 있으면 Some(행)을 반환합니다.
    .fetch_optional(pool)
    .await?;

    row.map(RecipeRow::into_recipe).transpose().map_err(Into::into)
}

/// cuisine이 정확히 일치하는 레시피를 페이지 단위로 조회합니다.
pub async fn list_recipes_by_cuisine(
    pool: &SqlitePool,
    cuisine: &str,
    page: &Pagination,
) -> Result<Vec<Recipe>, AppError> {
    let rows = sqlx::query_as::<_, RecipeRow>(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes WHERE cuisine = ? LIMIT ? OFFSET ?"
    ))
    .bind(cuisine)
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    decode_rows(rows)
}

/// 레시피 한 건을 삽입합니다. 적재 도구가 트랜잭션 안에서 호출합니다.
///
/// `nutrients`는 없으면 `{}`, `ingredients`/`instructions`는 없으면 `[]`로
/// 인코딩하여 저장합니다. 스칼라 필드는 그대로(NULL 포함) 저장합니다.
///
/// # 매개변수
/// - `executor`: 풀 또는 진행 중인 트랜잭션. `impl SqliteExecutor`로 받아
///   양쪽 모두 허용합니다.
pub async fn insert_recipe(
    executor: impl sqlx::SqliteExecutor<'_>,
    recipe: &NewRecipe,
) -> Result<(), AppError> {
    // 구조화된 값 → JSON 문자열 인코딩은 바인딩 직전, 이 지점에서만 일어납니다.
    let nutrients = serde_json::to_string(&recipe.nutrients.clone().unwrap_or_default())?;
    let ingredients = serde_json::to_string(&recipe.ingredients.clone().unwrap_or_default())?;
    let instructions = serde_json::to_string(&recipe.instructions.clone().unwrap_or_default())?;

    sqlx::query(
        r#"
        INSERT INTO recipes
            (title, cuisine, rating, total_time, serves, description,
             cook_time, prep_time, nutrients, ingredients, instructions)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(recipe.title.as_deref())
    .bind(recipe.cuisine.as_deref())
    .bind(recipe.rating)
    .bind(recipe.total_time.as_deref())
    .bind(recipe.serves.as_deref())
    .bind(recipe.description.as_deref())
    .bind(recipe.cook_time.as_deref())
    .bind(recipe.prep_time.as_deref())
    .bind(nutrients)
    .bind(ingredients)
    .bind(instructions)
    .execute(executor)
    .await?;

    Ok(())
}

/// recipes 테이블의 전체 행 수를 반환합니다.
///
/// 적재 도구의 완료 메시지와 테스트에서 사용합니다.
pub async fn count_recipes(pool: &SqlitePool) -> Result<i64, AppError> {
    // query_as::<_, (i64,)>: 결과를 i64 하나짜리 튜플로 매핑합니다
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipes")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
