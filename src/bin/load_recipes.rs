//! # 레시피 적재 도구 진입점
//!
//! `US_recipes_null.json`(또는 RECIPES_FILE 환경변수의 파일)을 읽어
//! `recipes.db`에 적재하는 일회성 CLI입니다. 인자는 받지 않습니다.
//!
//! 성공하면 완료 메시지 한 줄을 출력하고 0으로 종료합니다.
//! 실패하면 anyhow가 에러 체인을 출력하고 0이 아닌 코드로 종료합니다.
//! 부분 성공은 없습니다 — 삽입 전부가 한 트랜잭션이므로,
//! 실패 시 테이블에는 아무것도 추가되지 않습니다.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use recipedex::{config::Config, loader};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // create_if_missing(true): DB 파일이 없으면 새로 만듭니다.
    // 적재 도구는 서비스보다 먼저 실행되므로 보통 이 경로로 파일이 생깁니다.
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("invalid database url {}", config.database_url))?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .with_context(|| format!("cannot open database {}", config.database_url))?;

    let inserted = loader::load_recipes(&pool, Path::new(&config.recipes_file)).await?;

    // 모든 삽입이 커밋된 뒤 연결을 명시적으로 닫습니다.
    pool.close().await;

    println!(
        "Loaded {} recipes from {} into {}.",
        inserted, config.recipes_file, config.database_url
    );

    Ok(())
}
