//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! services 계층이 트랜잭션을 열고, 이 모듈의 함수에 연결을 빌려줍니다.
//!
//! 각 하위 모듈:
//! - `categories`: 카테고리 CRUD 쿼리

pub mod categories;

/// 테스트용 인메모리 SQLite 풀
///
/// `sqlite::memory:` 데이터베이스는 연결마다 따로 생기므로
/// 연결을 하나로 제한하고, 그 연결이 닫히지 않도록 타임아웃을 끕니다.
#[cfg(test)]
pub async fn test_pool() -> sqlx::SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<std::time::Duration>)
        .max_lifetime(None::<std::time::Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    pool
}

/// 테스트용 파일 기반 SQLite 풀
///
/// 인메모리 풀과 달리 연결을 여러 개 열 수 있어서, 동시 요청이
/// 실제 서버처럼 SQLite 쓰기 잠금을 두고 경쟁합니다.
/// `dir`은 테스트가 끝날 때 지워지는 임시 디렉토리입니다.
#[cfg(test)]
pub async fn file_test_pool(dir: &std::path::Path) -> sqlx::SqlitePool {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};

    let options = SqliteConnectOptions::new()
        .filename(dir.join("categories.db"))
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(5));

    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
        .expect("file-backed sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    pool
}
