//! 토큰 발급 및 검증.
//!
//! 사용자 이름을 담은 HS256 JWT를 발급합니다. 만료 시간은 선택이며
//! 기본 발급 경로는 만료 없는 토큰입니다. 검증 시 `exp` 클레임이
//! 있으면 만료를 확인하고, 없으면 서명만 확인합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// 토큰 페이로드.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject - 사용자 이름
    pub sub: String,
    /// Issued At - 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// Expiration - 만료 시각 (Unix timestamp, 선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// 만료 없는 클레임 생성.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            sub: username.into(),
            iat: Utc::now().timestamp(),
            exp: None,
        }
    }

    /// 만료 시간이 있는 클레임 생성.
    pub fn with_ttl(username: impl Into<String>, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: username.into(),
            iat: now.timestamp(),
            exp: Some((now + Duration::minutes(ttl_minutes)).timestamp()),
        }
    }
}

/// 토큰 처리 에러.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("토큰 인코딩 실패: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
    #[error("토큰이 만료되었습니다")]
    Expired,
    #[error("유효하지 않은 토큰")]
    Invalid,
}

/// 토큰 발급.
///
/// `ttl_minutes`가 `None`이면 만료 없는 토큰을 발급합니다.
pub fn issue_token(
    username: &str,
    secret: &SecretString,
    ttl_minutes: Option<i64>,
) -> Result<String, TokenError> {
    let claims = match ttl_minutes {
        Some(minutes) => TokenClaims::with_ttl(username, minutes),
        None => TokenClaims::new(username),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(TokenError::from)
}

/// 토큰 검증 및 디코딩.
///
/// 서명이 맞지 않거나 형식이 깨진 토큰은 [`TokenError::Invalid`],
/// `exp`가 지난 토큰은 [`TokenError::Expired`]입니다.
pub fn verify_token(token: &str, secret: &SecretString) -> Result<TokenClaims, TokenError> {
    // exp 클레임이 없는 토큰도 허용하되, 있으면 만료를 검사한다
    let mut validation = Validation::default();
    validation.required_spec_claims.clear();
    validation.validate_exp = true;

    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })
}
