//! # Account Service
//!
//! 사용자 계정의 영속화, 비밀번호 및 토큰 연산을 제공합니다.
//!
//! 이 크레이트는 HTTP 계층 없이 라이브러리로 사용됩니다. 상위 서비스가
//! [`AccountService`]를 통해 등록, 인증, 토큰 발급/검증, 목록 조회를
//! 수행합니다. 저장소는 [`repository::UserStore`] trait 뒤에 있으므로
//! Postgres([`repository::PgUserStore`])와 인메모리
//! ([`repository::MemoryUserStore`]) 구현을 바꿔 낄 수 있습니다.
//!
//! 비밀번호 해싱은 저장소 훅이 아니라 서비스 계층의 명시적 단계입니다.
//! 평문은 해시 이후 어디에도 저장되지 않습니다.

pub mod auth;
pub mod repository;
pub mod service;

pub use service::AccountService;
