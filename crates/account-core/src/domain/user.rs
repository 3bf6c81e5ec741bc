//! 사용자 계정 레코드.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::Role;

/// 사용자 계정 레코드.
///
/// 저장소에 영속화되는 단일 계정 문서입니다. `password_hash`에는 평문이
/// 아닌 솔트 포함 단방향 해시만 저장됩니다. 인증 식별자는 `username`이며
/// 대소문자를 구분한 정확 일치로 조회합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct UserAccount {
    /// 레코드 식별자
    pub id: Uuid,
    /// 사용자 이름 (인증 식별자, 고유)
    pub username: String,
    /// PHC 형식 비밀번호 해시 (평문 저장 금지)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// 이메일 (선택)
    #[cfg_attr(feature = "sqlx-support", sqlx(default))]
    pub email: Option<String>,
    /// 전체 이름 (선택)
    #[cfg_attr(feature = "sqlx-support", sqlx(default))]
    pub fullname: Option<String>,
    /// 역할
    pub role: Role,
    /// 생성 시각
    pub created_at: DateTime<Utc>,
    /// 수정 시각
    pub updated_at: DateTime<Utc>,
}

/// 새 계정 입력.
///
/// 등록 시점에 호출자가 제공하는 값입니다. `password`는 이 시점에만
/// 평문으로 존재하며 저장 전에 해시로 대체됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUserAccount {
    /// 사용자 이름 (필수)
    #[validate(length(min = 1, message = "사용자 이름은 필수입니다"))]
    pub username: String,
    /// 평문 비밀번호 (필수)
    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
    /// 이메일 (선택)
    #[serde(default)]
    #[validate(email(message = "이메일 형식이 올바르지 않습니다"))]
    pub email: Option<String>,
    /// 전체 이름 (선택)
    #[serde(default)]
    pub fullname: Option<String>,
    /// 역할 (기본값: user)
    #[serde(default)]
    pub role: Role,
}

impl NewUserAccount {
    /// 필수 필드만으로 새 입력 생성.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: None,
            fullname: None,
            role: Role::default(),
        }
    }

    /// 이메일 설정.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// 전체 이름 설정.
    pub fn with_fullname(mut self, fullname: impl Into<String>) -> Self {
        self.fullname = Some(fullname.into());
        self
    }

    /// 역할 설정.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_defaults() {
        let input = NewUserAccount::new("ash", "changeme");
        assert_eq!(input.username, "ash");
        assert_eq!(input.role, Role::User);
        assert!(input.email.is_none());
        assert!(input.fullname.is_none());
    }

    #[test]
    fn test_new_account_validation() {
        assert!(NewUserAccount::new("ash", "pw").validate().is_ok());
        assert!(NewUserAccount::new("", "pw").validate().is_err());
        assert!(NewUserAccount::new("ash", "").validate().is_err());
        assert!(NewUserAccount::new("ash", "pw")
            .with_email("not-an-email")
            .validate()
            .is_err());
        assert!(NewUserAccount::new("ash", "pw")
            .with_email("ash@example.com")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_deserialize_defaults_role() {
        let input: NewUserAccount =
            serde_json::from_str(r#"{"username":"ash","password":"pw"}"#).unwrap();
        assert_eq!(input.role, Role::User);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = UserAccount {
            id: Uuid::new_v4(),
            username: "ash".to_string(),
            password_hash: "$argon2id$...".to_string(),
            email: None,
            fullname: None,
            role: Role::Admin,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }
}
