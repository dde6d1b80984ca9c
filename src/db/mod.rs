//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)와 적재 도구(loader)가 이 모듈의 함수를 호출합니다.
//!
//! 각 하위 모듈:
//! - `recipes`: recipes 테이블의 조회/검색/삽입 쿼리
//!
//! 연결 관리: 전역 연결 객체는 없습니다. `SqlitePool`이 연결 팩토리 역할을
//! 하며, 각 쿼리는 풀에서 연결을 빌렸다가 쿼리가 끝나면 결정적으로 반납합니다.

use sqlx::migrate::Migrator;

pub mod recipes;

pub use recipes::*;

/// 컴파일 타임에 ./migrations 폴더의 SQL 파일들을 내장한 마이그레이터.
///
/// 서버, 적재 도구, 테스트가 모두 이 마이그레이터로 스키마를 준비합니다.
/// 마이그레이션 SQL이 `CREATE TABLE IF NOT EXISTS`이므로 몇 번을 실행해도
/// 안전합니다(멱등).
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
