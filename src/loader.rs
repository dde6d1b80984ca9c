//! # 레시피 적재(Loader) 모듈
//!
//! 소스 JSON 문서를 읽어 `recipes` 테이블에 넣는 일회성 적재 로직입니다.
//! 서비스가 시작되기 전에 `load_recipes` 바이너리를 통해 한 번 실행됩니다.
//!
//! ## 계약
//! - 소스 문서의 최상위 값은 "임의의 키 → 레시피 객체" 매핑이어야 합니다.
//!   배열이거나 객체가 아니면 즉시 실패합니다.
//! - 행은 문서의 순회 순서대로 삽입됩니다
//!   (serde_json의 preserve_order feature가 입력 순서를 유지).
//! - 모든 삽입은 하나의 트랜잭션으로 커밋됩니다. 중간에 실패하면
//!   아무 행도 남지 않습니다.
//! - 멱등하지 않습니다: 같은 파일로 다시 실행하면 전체가 한 벌 더
//!   추가됩니다 (제목이나 원본 id 기준의 중복 검사 없음).
//!
//! 에러는 복구하지 않고 호출자(바이너리의 main)까지 전파되어
//! 프로세스를 비정상 종료시킵니다. anyhow의 `context()`로
//! 어느 단계에서 실패했는지를 에러 체인에 남깁니다.

use std::path::Path;

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::db;
use crate::models::NewRecipe;

/// JSON 문서를 파싱하여 recipes 테이블에 적재합니다.
///
/// 스키마가 없으면 먼저 만들고(멱등), 레코드 전부를 한 트랜잭션으로
/// 삽입한 뒤 삽입된 행 수를 반환합니다.
///
/// # 매개변수
/// - `pool`: 대상 데이터베이스의 연결 풀
/// - `path`: 소스 JSON 파일 경로
pub async fn load_recipes(pool: &SqlitePool, path: &Path) -> Result<usize> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read source file {}", path.display()))?;

    // 최상위가 객체가 아니면(예: 배열) 여기서 실패합니다.
    // Map<String, Value>는 preserve_order로 인해 입력 순서를 유지합니다.
    let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw)
        .with_context(|| {
            format!(
                "source file {} is not a JSON object of recipe objects",
                path.display()
            )
        })?;

    db::MIGRATOR
        .run(pool)
        .await
        .context("failed to prepare the recipes table")?;

    let mut tx = pool.begin().await.context("failed to begin transaction")?;

    let mut inserted = 0usize;
    for (key, value) in document {
        // 소스 문서의 키(원본 id)는 버리고 값만 사용합니다.
        // 새 id는 INSERT 시 DB가 부여합니다.
        let recipe: NewRecipe = serde_json::from_value(value)
            .with_context(|| format!("recipe entry '{key}' has an unexpected shape"))?;
        db::insert_recipe(&mut *tx, &recipe)
            .await
            .with_context(|| format!("failed to insert recipe entry '{key}'"))?;
        inserted += 1;
    }

    // 전 레코드를 하나의 단위로 커밋합니다.
    tx.commit().await.context("failed to commit inserts")?;

    Ok(inserted)
}
