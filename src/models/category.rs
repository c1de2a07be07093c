//! # 카테고리 모델 정의
//!
//! 카테고리(Category) API에서 사용하는 데이터 구조체들을 정의합니다.
//!
//! ## 구조체 역할
//! - `Category`: 데이터베이스에 저장된 카테고리 (응답용)
//! - `CategoryCreateRequest`: 새 카테고리 생성 시 클라이언트가 보내는 JSON 본문
//! - `CategoryUpdateRequest`: 카테고리 수정 시 클라이언트가 보내는 JSON 본문

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 카테고리 엔티티: DB의 `category` 테이블 한 행(row)에 대응합니다.
///
/// - `Serialize`: API 응답 시 JSON으로 변환
/// - `sqlx::FromRow`: SQL 쿼리 결과(행)를 이 구조체로 자동 매핑
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Category {
    /// 자동 증가(AUTOINCREMENT) 정수 식별자. 첫 행은 1부터 시작합니다.
    pub id: i64,
    /// 카테고리 이름 (빈 문자열 불가)
    pub name: String,
}

/// 카테고리 생성 요청: `POST /api/categories`의 요청 본문입니다.
///
/// `#[derive(Validate)]`: validator 크레이트가 `validate()` 메서드를 생성합니다.
/// `length(min = 1)`은 빈 문자열을 거부하고, 위반 시 규칙 코드는 `required`입니다.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryCreateRequest {
    #[validate(length(min = 1, code = "required"))]
    pub name: String,
}

/// 카테고리 수정 요청: `PUT /api/categories/{id}`의 요청 본문입니다.
///
/// PATCH가 아닌 PUT이므로 모든 필드가 필수입니다.
/// 수정 대상 id는 본문이 아니라 URL 경로에서 가져옵니다.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryUpdateRequest {
    #[validate(length(min = 1, code = "required"))]
    pub name: String,
}
