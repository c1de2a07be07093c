//! # 입력 검증 어댑터
//!
//! validator 크레이트의 `Validate` 트레이트를 감싸서, 검증 실패를
//! `AppError::Validation`으로 바꿔 줍니다. 애플리케이션에서
//! `ValidationErrors`를 만드는 곳은 이 함수 하나뿐입니다.

use crate::error::AppError;
use validator::Validate;

/// 요청 본문을 검증합니다.
///
/// - 통과: `Ok(())`, 부수 효과 없음
/// - 실패: 위반한 필드마다 (필드 이름, 규칙 코드)를 담은 `AppError::Validation`
pub fn validate<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate()?;
    Ok(())
}
