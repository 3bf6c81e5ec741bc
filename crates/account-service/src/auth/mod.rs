//! 인증 프리미티브.
//!
//! 비밀번호 해싱과 토큰 서명/검증을 담당합니다. 저장소 접근은 없습니다.

mod password;
mod token;

pub use password::{hash_password, verify_password, PasswordError};
pub use token::{issue_token, verify_token, TokenClaims, TokenError};
