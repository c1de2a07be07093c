//! # 카테고리 서비스
//!
//! 라우트 핸들러와 db 계층 사이에서 다음을 담당합니다:
//! 1. 입력 검증 (트랜잭션을 열기 전에)
//! 2. 트랜잭션 열기 → db 함수 호출 → 커밋
//! 3. "행 없음"(`None` 또는 영향받은 행 0개)을 `NotFoundError`로 변환
//!
//! ## 트랜잭션 규칙
//! 요청 하나당 트랜잭션 하나를 열고, 이 함수들만 그 트랜잭션을 소유합니다.
//! 명시적인 rollback은 하지 않습니다. `?`로 일찍 반환하면 `Transaction`이
//! drop되면서 자동으로 롤백됩니다. 클라이언트 연결이 끊겨 핸들러 future가
//! drop되는 경우도 마찬가지입니다.

use crate::{
    db,
    error::{AppError, NotFoundError},
    models::{Category, CategoryCreateRequest, CategoryUpdateRequest},
    services::validation::validate,
};
use sqlx::{SqliteConnection, SqlitePool};

fn category_not_found() -> AppError {
    NotFoundError::new("category is not found").into()
}

async fn find_existing(conn: &mut SqliteConnection, id: i64) -> Result<Category, AppError> {
    db::categories::find_by_id(conn, id)
        .await?
        // ok_or_else(): Option<Category>를 Result로 변환
        // None일 때만 에러를 만들므로 ok_or보다 할당이 적습니다
        .ok_or_else(category_not_found)
}

pub async fn create(pool: &SqlitePool, req: &CategoryCreateRequest) -> Result<Category, AppError> {
    validate(req)?;

    // begin(): 풀에서 연결을 하나 빌려 BEGIN을 실행합니다
    // &mut tx는 DerefMut으로 &mut SqliteConnection이 되어 db 함수에 넘어갑니다
    let mut tx = pool.begin().await?;
    let category = db::categories::save(&mut tx, &req.name).await?;
    // commit()은 tx를 소비(move)하므로 이후 tx를 다시 쓸 수 없습니다
    tx.commit().await?;

    tracing::debug!("Created category {}", category.id);
    Ok(category)
}

/// 이름을 수정합니다.
///
/// 검증 → 트랜잭션 → UPDATE 순서입니다. 존재 확인은 UPDATE의 영향받은 행 수로
/// 대신하므로, 트랜잭션의 첫 문장이 쓰기가 되어 동시 수정 요청끼리
/// SQLite 쓰기 잠금을 순서대로 기다립니다.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    req: &CategoryUpdateRequest,
) -> Result<Category, AppError> {
    // 검증은 항상 트랜잭션보다 먼저 (실패하면 DB를 건드리지 않음)
    validate(req)?;

    let mut tx = pool.begin().await?;
    let category = Category {
        id,
        name: req.name.clone(),
    };
    // None(영향받은 행 없음)이면 404
    let category = db::categories::update(&mut tx, category)
        .await?
        .ok_or_else(category_not_found)?;
    tx.commit().await?;

    tracing::debug!("Updated category {}", id);
    Ok(category)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    let deleted = db::categories::delete(&mut tx, id).await?;
    if !deleted {
        // 여기서 반환하면 tx가 drop되며 롤백됩니다 (삭제된 행이 없으니 변경도 없음)
        return Err(category_not_found());
    }
    tx.commit().await?;

    tracing::debug!("Deleted category {}", id);
    Ok(())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Category, AppError> {
    let mut tx = pool.begin().await?;
    let category = find_existing(&mut tx, id).await?;
    tx.commit().await?;

    Ok(category)
}

/// 전체 목록을 조회합니다. 비어 있어도 에러가 아닙니다.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Category>, AppError> {
    let mut tx = pool.begin().await?;
    let categories = db::categories::find_all(&mut tx).await?;
    tx.commit().await?;

    Ok(categories)
}
