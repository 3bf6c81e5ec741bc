//! 계정 서비스.
//!
//! 등록, 인증, 토큰 발급/검증, 목록 조회를 묶는 서비스 계층입니다.
//!
//! # 에러 규약
//!
//! - 잘못된 자격 증명(없는 사용자, 틀린 비밀번호)은 `Ok(None)`입니다.
//! - 저장소 장애는 로그를 남기고 `Err`로 전파합니다. 자격 증명 실패와
//!   시스템 장애를 호출자가 구분할 수 있습니다.
//! - 토큰 검증 실패는 원인과 무관하게 [`AccountError::TokenRejected`]
//!   하나로 수렴합니다. 서명 불일치, 만료, 형식 오류, 사용자 삭제를
//!   외부에서 구분할 수 없습니다.

use std::sync::Arc;

use account_core::{AccountError, AccountResult, AuthConfig, NewUserAccount, UserAccount};
use chrono::Utc;
use secrecy::SecretString;
use tracing::{debug, error, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::auth::{self, PasswordError};
use crate::repository::{StoreError, UserStore};

/// 사용자 계정 서비스.
pub struct AccountService {
    store: Arc<dyn UserStore>,
    token_secret: SecretString,
    token_ttl_minutes: Option<i64>,
}

impl AccountService {
    /// 저장소와 인증 설정으로 서비스 생성.
    pub fn new(store: Arc<dyn UserStore>, auth: AuthConfig) -> Self {
        Self {
            store,
            token_secret: auth.token_secret,
            token_ttl_minutes: auth.token_ttl_minutes,
        }
    }

    /// 새 계정 등록.
    ///
    /// 입력을 검증하고 평문 비밀번호를 해시로 대체한 뒤 삽입합니다.
    /// 해싱이 실패하면 아무것도 저장하지 않습니다.
    pub async fn register(&self, input: NewUserAccount) -> AccountResult<UserAccount> {
        input
            .validate()
            .map_err(|e| AccountError::Validation(e.to_string()))?;

        let password_hash =
            auth::hash_password(&input.password).map_err(|_| AccountError::Hashing)?;

        let now = Utc::now();
        let user = UserAccount {
            id: Uuid::new_v4(),
            username: input.username,
            password_hash,
            email: input.email,
            fullname: input.fullname,
            role: input.role,
            created_at: now,
            updated_at: now,
        };

        let user = self.store.insert(user).await.map_err(map_store_error)?;
        info!(username = %user.username, role = %user.role, "계정 등록됨");
        Ok(user)
    }

    /// 비밀번호 변경.
    ///
    /// 새 평문을 해시한 뒤 저장소를 갱신합니다. 해시마다 새 솔트를
    /// 사용하므로 같은 평문이라도 저장 값은 매번 다릅니다.
    pub async fn set_password(&self, username: &str, password: &str) -> AccountResult<()> {
        if password.is_empty() {
            return Err(AccountError::Validation(
                "비밀번호는 필수입니다".to_string(),
            ));
        }

        let password_hash = auth::hash_password(password).map_err(|_| AccountError::Hashing)?;

        self.store
            .update_password(username, &password_hash)
            .await
            .map_err(map_store_error)?;

        info!(username = %username, "비밀번호 변경됨");
        Ok(())
    }

    /// 사용자 이름과 비밀번호로 인증.
    ///
    /// 없는 사용자와 틀린 비밀번호는 모두 `Ok(None)`입니다.
    /// 저장소 장애는 로그 후 `Err`로 전파합니다.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> AccountResult<Option<UserAccount>> {
        let user = match self.store.find_by_username(username).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!(username = %username, "인증 실패: 사용자 없음");
                return Ok(None);
            }
            Err(e) => {
                error!(username = %username, error = %e, "인증 중 저장소 조회 실패");
                return Err(map_store_error(e));
            }
        };

        match auth::verify_password(password, &user.password_hash) {
            Ok(()) => Ok(Some(user)),
            Err(PasswordError::VerificationFailed) => {
                debug!(username = %username, "인증 실패: 비밀번호 불일치");
                Ok(None)
            }
            Err(e) => {
                // 저장된 해시 자체가 깨진 경우는 자격 증명 실패가 아니다
                warn!(username = %username, error = %e, "저장된 해시가 유효하지 않음");
                Err(AccountError::Store(e.to_string()))
            }
        }
    }

    /// 레코드 단위 비밀번호 비교.
    ///
    /// 일치하면 전달받은 레코드를 그대로 돌려주고, 불일치하면 `None`.
    /// 단순 불일치로는 에러를 내지 않습니다.
    pub fn compare_password<'a>(
        &self,
        user: &'a UserAccount,
        password: &str,
    ) -> Option<&'a UserAccount> {
        match auth::verify_password(password, &user.password_hash) {
            Ok(()) => Some(user),
            Err(_) => None,
        }
    }

    /// 계정에 대한 서명 토큰 발급.
    ///
    /// 페이로드는 사용자 이름뿐입니다. 설정에 TTL이 없으면 만료 없는
    /// 토큰을 발급합니다.
    pub fn issue_token(&self, user: &UserAccount) -> AccountResult<String> {
        auth::issue_token(&user.username, &self.token_secret, self.token_ttl_minutes)
            .map_err(|e| AccountError::TokenIssue(e.to_string()))
    }

    /// 토큰으로 인증.
    ///
    /// 서명과 만료를 검증한 뒤 페이로드의 사용자 이름으로 레코드를
    /// 조회합니다. 어떤 단계에서 실패하든 호출자에게는 동일한
    /// [`AccountError::TokenRejected`]만 보입니다.
    pub async fn authenticate_token(&self, token: &str) -> AccountResult<UserAccount> {
        let claims = auth::verify_token(token, &self.token_secret).map_err(|e| {
            debug!(error = %e, "토큰 검증 실패");
            AccountError::TokenRejected
        })?;

        match self.store.find_by_username(&claims.sub).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => {
                debug!(username = %claims.sub, "토큰의 사용자가 더 이상 존재하지 않음");
                Err(AccountError::TokenRejected)
            }
            Err(e) => {
                warn!(username = %claims.sub, error = %e, "토큰 인증 중 저장소 조회 실패");
                Err(AccountError::TokenRejected)
            }
        }
    }

    /// 전체 계정 목록.
    ///
    /// 저장소의 삽입 순서대로 모든 레코드를 반환합니다. 페이지네이션은
    /// 없습니다.
    pub async fn list(&self) -> AccountResult<Vec<UserAccount>> {
        self.store.list().await.map_err(map_store_error)
    }
}

fn map_store_error(e: StoreError) -> AccountError {
    match e {
        StoreError::DuplicateUsername(_) => AccountError::Validation(e.to_string()),
        StoreError::NotFound(username) => AccountError::UserNotFound(username),
        StoreError::Database(_) => AccountError::Store(e.to_string()),
    }
}
