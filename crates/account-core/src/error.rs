//! 계정 시스템의 에러 타입.
//!
//! 이 모듈은 계정 시스템 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 계정 에러.
#[derive(Debug, Error)]
pub enum AccountError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 입력 유효성 검사 실패
    #[error("유효성 검사 실패: {0}")]
    Validation(String),

    /// 저장소 에러
    #[error("저장소 에러: {0}")]
    Store(String),

    /// 비밀번호 해싱 실패 (저장 중단)
    #[error("저장하지 못했습니다")]
    Hashing,

    /// 토큰 발급 실패
    #[error("토큰 발급 실패: {0}")]
    TokenIssue(String),

    /// 토큰 거부.
    ///
    /// 서명 불일치, 만료, 형식 오류, 사용자 삭제를 구분하지 않습니다.
    /// 호출자에게 실패 원인을 노출하지 않기 위해 단일 변형으로 수렴합니다.
    #[error("유효하지 않은 토큰")]
    TokenRejected,

    /// 대상 사용자를 찾을 수 없음
    #[error("사용자를 찾을 수 없습니다: {0}")]
    UserNotFound(String),
}

/// 계정 시스템 전용 Result 타입.
pub type AccountResult<T> = std::result::Result<T, AccountError>;
