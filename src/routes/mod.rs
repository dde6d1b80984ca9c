//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `recipes`: 레시피 목록/검색/단건 조회 핸들러

pub mod health;
pub mod recipes;

// 각 모듈의 핸들러 함수들을 재공개하여
// lib.rs에서 `routes::list_recipes`처럼 바로 접근 가능하게 합니다.
pub use health::*;
pub use recipes::*;
