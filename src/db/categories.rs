//! # 카테고리 데이터베이스 쿼리 모듈
//!
//! `category` 테이블 하나에 대한 CRUD SQL 함수들입니다.
//!
//! 모든 함수는 `SqlitePool`이 아니라 `&mut SqliteConnection`을 받습니다.
//! 호출하는 쪽(services)이 연 트랜잭션 안에서 실행되어야 하기 때문입니다.
//! `Transaction`은 `DerefMut<Target = SqliteConnection>`을 구현하므로
//! `&mut *tx`로 넘기면 됩니다.
//!
//! ## 테이블 구조
//! - `category`: (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)

use crate::error::AppError;
use crate::models::Category;
use sqlx::SqliteConnection;

/// 새 카테고리를 저장하고, 부여된 id를 채워 반환합니다.
///
/// `last_insert_rowid()`: SQLite가 방금 INSERT한 행의 rowid(여기서는 id)를 돌려줍니다.
pub async fn save(conn: &mut SqliteConnection, name: &str) -> Result<Category, AppError> {
    let result = sqlx::query("INSERT INTO category (name) VALUES (?)")
        .bind(name)
        .execute(&mut *conn)
        .await?;

    Ok(Category {
        id: result.last_insert_rowid(),
        name: name.to_string(),
    })
}

/// 카테고리 이름을 수정합니다.
///
/// 존재 여부를 먼저 SELECT로 확인하지 않고 바로 UPDATE를 실행합니다.
/// SQLite에서 트랜잭션의 첫 문장이 쓰기여야 동시 요청이 busy timeout 동안
/// 기다렸다가 순서대로 처리됩니다. (읽기 후 쓰기는 SQLITE_BUSY로 바로 실패)
///
/// ## 반환값
/// - `Ok(Some(Category))`: 수정 성공
/// - `Ok(None)`: 해당 ID의 카테고리가 없음 (영향받은 행 0개)
pub async fn update(
    conn: &mut SqliteConnection,
    category: Category,
) -> Result<Option<Category>, AppError> {
    let result = sqlx::query("UPDATE category SET name = ? WHERE id = ?")
        .bind(&category.name)
        .bind(category.id)
        .execute(&mut *conn)
        .await?;

    // rows_affected(): 이 쿼리로 영향받은 행 수
    if result.rows_affected() == 0 {
        return Ok(None);
    }
    Ok(Some(category))
}

/// ID로 카테고리를 삭제합니다.
///
/// ## 반환값
/// - `true`: 삭제 성공
/// - `false`: 해당 ID의 카테고리가 없어 삭제된 행이 없음
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM category WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// ID로 카테고리 하나를 조회합니다.
///
/// 행이 없으면 `Ok(None)`을 반환합니다. 404로 바꾸는 일은 services 계층이 합니다.
pub async fn find_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Category>, AppError> {
    let category = sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(category)
}

/// 모든 카테고리를 삽입 순서(id 오름차순)로 조회합니다.
pub async fn find_all(conn: &mut SqliteConnection) -> Result<Vec<Category>, AppError> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM category ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;

    Ok(categories)
}
