//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (필수)
//! - `API_KEY`: `X-API-KEY` 헤더와 비교할 비밀키 (필수)
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호
//! - `DATABASE_MAX_CONNECTIONS`: 연결 풀 최대 연결 수

use std::env;

use thiserror::Error;

/// 설정을 읽다가 생길 수 있는 에러
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 필수 환경변수가 없거나 UTF-8이 아님
    #[error("{name}: {source}")]
    Var {
        name: &'static str,
        #[source]
        source: env::VarError,
    },

    /// `API_KEY`가 비어 있음 (빈 키는 빈 헤더와 일치해 버림)
    #[error("API_KEY must not be empty")]
    EmptyApiKey,
}

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 `AppState`로 옮겨집니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 URL (예: "sqlite:data/categories.db?mode=rwc")
    pub database_url: String,
    /// API 공유 비밀키
    pub api_key: String,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 3000)
    pub port: u16,
    /// 연결 풀 최대 연결 수 (기본값: 20)
    pub max_connections: u32,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name))
    }

    /// 이름 → 값 조회 함수로부터 설정을 만듭니다.
    ///
    /// `from_env()`는 `env::var`를 넘기고, 테스트는 HashMap 조회를 넘깁니다.
    /// (테스트끼리 프로세스 환경변수를 건드리지 않도록)
    ///
    /// # 에러
    /// `DATABASE_URL`과 `API_KEY`는 필수이며, 없으면 에러가 발생합니다.
    /// `API_KEY`가 비어 있거나 공백뿐이어도 에러입니다.
    /// 나머지 설정은 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        // 필수 값: 없으면 어떤 변수가 빠졌는지 이름을 담아 반환
        let required = |name: &'static str| {
            var(name).map_err(|source| ConfigError::Var { name, source })
        };

        let api_key = required("API_KEY")?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            api_key,
            // unwrap_or_else: 값이 없을 때만 기본값 문자열을 만듭니다
            host: var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            // 숫자로 파싱할 수 없는 값도 기본값으로 대체
            port: var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(3000),
            max_connections: var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|max| max.parse().ok())
                .unwrap_or(20),
        })
    }
}
