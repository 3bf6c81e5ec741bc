//! 사용자 계정 저장소.
//!
//! 계정 레코드의 영속화를 [`UserStore`] trait 뒤로 추상화합니다.
//! 레코드 타입은 특정 드라이버에 묶이지 않으며, 해싱 같은 도메인 로직은
//! 저장소 훅이 아니라 서비스 계층에서 수행됩니다.

use account_core::UserAccount;
use async_trait::async_trait;

mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// 저장소 에러.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// 드라이버 에러
    #[error("데이터베이스 에러: {0}")]
    Database(#[from] sqlx::Error),

    /// username 고유 제약 위반
    #[error("이미 존재하는 사용자 이름입니다: {0}")]
    DuplicateUsername(String),

    /// 갱신/삭제 대상 없음
    #[error("사용자를 찾을 수 없습니다: {0}")]
    NotFound(String),
}

/// 사용자 계정 저장소 trait.
///
/// `username`은 대소문자를 구분하는 정확 일치로 조회합니다.
/// 모든 쓰기 연산은 이미 해시된 비밀번호를 받습니다. 평문을 이 계층에
/// 전달하면 안 됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 레코드 삽입.
    async fn insert(&self, user: UserAccount) -> Result<UserAccount, StoreError>;

    /// username으로 단건 조회.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, StoreError>;

    /// 비밀번호 해시 갱신.
    async fn update_password(&self, username: &str, password_hash: &str)
        -> Result<(), StoreError>;

    /// 전체 레코드를 삽입 순서로 조회.
    async fn list(&self) -> Result<Vec<UserAccount>, StoreError>;

    /// 레코드 삭제.
    async fn delete(&self, username: &str) -> Result<(), StoreError>;
}
