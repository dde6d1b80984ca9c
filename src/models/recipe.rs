use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// API 응답에 나가는 레시피 도메인 엔티티.
///
/// `nutrients`/`ingredients`/`instructions`는 DB에 JSON 문자열로 저장되지만,
/// 이 구조체에 담기는 시점에는 이미 구조화된 값으로 디코딩되어 있습니다.
/// 직렬화된 문자열은 db 계층 바깥으로 나오지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub id: i64,
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub total_time: Option<String>,
    pub serves: Option<String>,
    pub description: Option<String>,
    pub cook_time: Option<String>,
    pub prep_time: Option<String>,
    pub nutrients: Map<String, Value>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// `recipes` 테이블의 원시 행. JSON 컬럼이 아직 문자열 상태입니다.
///
/// 쿼리 결과는 항상 이 타입으로 받은 뒤 [`RecipeRow::into_recipe`]로
/// 즉시 디코딩합니다.
#[derive(Debug, sqlx::FromRow)]
pub struct RecipeRow {
    pub id: i64,
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub total_time: Option<String>,
    pub serves: Option<String>,
    pub description: Option<String>,
    pub cook_time: Option<String>,
    pub prep_time: Option<String>,
    pub nutrients: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
}

impl RecipeRow {
    /// JSON 컬럼을 디코딩하여 도메인 엔티티로 변환합니다.
    ///
    /// NULL이거나 빈 문자열인 컬럼은 빈 값(`{}`/`[]`)으로 처리합니다.
    /// 비어 있지 않은데 JSON으로 파싱되지 않는 컬럼은 저장소 오류이므로
    /// 에러를 그대로 전파합니다.
    pub fn into_recipe(self) -> Result<Recipe, serde_json::Error> {
        Ok(Recipe {
            id: self.id,
            title: self.title,
            cuisine: self.cuisine,
            rating: self.rating,
            total_time: self.total_time,
            serves: self.serves,
            description: self.description,
            cook_time: self.cook_time,
            prep_time: self.prep_time,
            nutrients: decode_json_column(self.nutrients)?,
            ingredients: decode_json_column(self.ingredients)?,
            instructions: decode_json_column(self.instructions)?,
        })
    }
}

/// NULL/빈 문자열 → 기본값, 그 외 → JSON 파싱.
fn decode_json_column<T>(raw: Option<String>) -> Result<T, serde_json::Error>
where
    T: serde::de::DeserializeOwned + Default,
{
    match raw.as_deref() {
        None | Some("") => Ok(T::default()),
        Some(text) => serde_json::from_str(text),
    }
}

/// 소스 JSON 문서의 레시피 한 건. 모든 필드가 선택(optional)입니다.
///
/// 적재 도구가 이 타입으로 역직렬화하며, 알 수 없는 키는 무시됩니다.
/// 소스 문서의 최상위 키(원본 id)는 버려지고 DB가 새 id를 부여합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewRecipe {
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub total_time: Option<String>,
    pub serves: Option<String>,
    pub description: Option<String>,
    pub cook_time: Option<String>,
    pub prep_time: Option<String>,
    /// 소스에 없거나 null이면 빈 객체로 저장됩니다.
    pub nutrients: Option<Map<String, Value>>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
}

/// `GET /api/recipes/search`의 필터 파라미터.
///
/// 생략된(또는 빈 문자열) 파라미터는 조건을 걸지 않습니다.
#[derive(Debug, Default, Deserialize)]
pub struct RecipeFilter {
    /// 부분 문자열 일치 (LIKE %title%)
    pub title: Option<String>,
    /// 정확히 일치
    pub cuisine: Option<String>,
    /// 이 값 이상 (rating >= ?)
    pub rating: Option<f64>,
    /// 정확히 일치
    pub total_time: Option<String>,
    /// 접두사 일치 (LIKE serves%)
    pub serves: Option<String>,
}

/// 목록 엔드포인트 공통 페이지네이션 파라미터.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl Pagination {
    /// 한 페이지 행 수. 0 이하는 1로 클램프합니다. 상한은 두지 않습니다.
    pub fn limit(&self) -> i64 {
        self.limit.max(1)
    }

    /// OFFSET = (page - 1) * limit. page도 최소 1로 클램프합니다.
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }
}
