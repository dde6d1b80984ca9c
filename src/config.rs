//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버/적재 도구 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목 (모두 기본값이 있어 환경변수 없이도 동작합니다):
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (기본값: "sqlite:recipes.db")
//! - `HOST`: 서버 바인딩 주소 (기본값: "0.0.0.0")
//! - `PORT`: 서버 포트 번호 (기본값: 5000)
//! - `STATIC_DIR`: 정적 파일(랜딩 페이지, 에셋) 디렉토리 (기본값: "static")
//! - `RECIPES_FILE`: 적재 도구가 읽는 소스 JSON 파일 (기본값: "US_recipes_null.json")

use std::env;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 프로세스 시작 시 환경변수에서 한 번 읽어온 후 공유됩니다.
/// 서버와 적재 도구(load_recipes)가 같은 설정을 사용하므로
/// 둘은 항상 같은 데이터베이스 파일을 바라봅니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 파일 경로 (예: "sqlite:recipes.db")
    pub database_url: String,
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    /// u16: 0~65535 범위의 부호 없는 16비트 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
    /// 정적 파일이 저장된 디렉토리 경로
    pub static_dir: String,
    /// 적재 도구가 읽는 소스 JSON 파일 경로
    pub recipes_file: String,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 모든 항목에 기본값이 있으므로 실패하지 않습니다.
    /// unwrap_or_else(|_| ...): 환경변수가 없을 때 기본값을 사용합니다.
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:recipes.db".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            // 포트 번호는 문자열 → 숫자 변환이 필요합니다.
            // .parse(): "5000" → 5000u16. 파싱 실패 시 기본값 5000 사용.
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            recipes_file: env::var("RECIPES_FILE")
                .unwrap_or_else(|_| "US_recipes_null.json".to_string()),
        }
    }
}
