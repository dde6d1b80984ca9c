//! # 요청 전처리 모듈
//!
//! 핸들러 본문에 들어가기 전에 HTTP 요청에서 데이터를 추출/검증하는
//! 커스텀 추출자(extractor)들을 모아둔 모듈입니다.
//!
//! - `query`: 쿼리 스트링 파싱 실패를 JSON envelope 400으로 변환하는 Query 래퍼

pub mod query;

pub use query::Query;
