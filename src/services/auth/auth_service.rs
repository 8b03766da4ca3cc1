//! # 인증 교환 서비스 구현
//!
//! 사용자명/비밀번호 쌍을 서명된 액세스 토큰으로 교환하는 핵심 인증
//! 흐름을 구현합니다. Spring Security의 AuthenticationManager +
//! JwtTokenProvider 조합이 하던 역할에 해당합니다.
//!
//! ## 인증 흐름
//!
//! ```text
//! signin(credentials)
//!    │
//!    ├─ 1. 사용자명만 로그에 기록 (비밀번호는 절대 기록하지 않음)
//!    ├─ 2. Authenticator::verify() ── 실패 → InvalidCredentials
//!    ├─ 3. UserDirectory::find_by_username() ── 역할 조회
//!    │      ├─ 레코드 없음(불일치 상태) → InvalidCredentials (fail-closed)
//!    │      └─ 조회 실패 → InvalidCredentials (fail-closed)
//!    ├─ 4. TokenIssuer::issue() ── 실패 → TokenIssuance (서버 결함)
//!    └─ 5. AccessToken 반환
//! ```
//!
//! ## 보안 설계 원칙
//!
//! 인증 단계의 모든 실패는 단일한 [`AppError::InvalidCredentials`]로
//! 수렴합니다. 호출자는 "사용자 없음", "비밀번호 불일치", "인증기 내부
//! 오류"를 구분할 수 없습니다. 응답으로 사용자명 존재 여부를 열거하는
//! 공격을 차단하기 위한 의도된 동작이므로, 더 구체적인 에러로 "개선"
//! 해서는 안 됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::dto::AccountCredentials;
use crate::domain::token::AccessToken;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserDirectory;
use crate::services::auth::token_service::TokenIssuer;

/// 자격 증명 검증 인터페이스
///
/// 사용자명/비밀번호 쌍의 유효성을 판단합니다. 해싱 방식과 저장소는
/// 구현의 관심사이며 이 크레이트의 범위 밖입니다.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// 자격 증명 검증
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 자격 증명 유효
    /// * `Err(AppError)` - 검증 실패 (사유 불문)
    async fn verify(&self, username: &str, password: &str) -> AppResult<()>;
}

/// 인증 교환 서비스
///
/// 상태를 갖지 않는 요청 단위 핸들러입니다. 모든 협력자는 생성 시점에
/// 주입되며, 호출 간 공유되는 가변 상태가 없으므로 여러 요청에서 동시에
/// 사용해도 안전합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use person_service_backend::services::auth::{AuthService, JwtTokenService};
///
/// let auth_service = AuthService::new(
///     authenticator,
///     user_directory,
///     Arc::new(JwtTokenService::from_env()),
///     settings.access_token_validity,
/// );
///
/// let token = auth_service.signin(&credentials).await?;
/// ```
pub struct AuthService {
    /// 자격 증명 검증 협력자
    authenticator: Arc<dyn Authenticator>,
    /// 역할 조회 협력자
    user_directory: Arc<dyn UserDirectory>,
    /// 토큰 발급 협력자
    token_issuer: Arc<dyn TokenIssuer>,
    /// 액세스 토큰 수명 (고정 설정값)
    token_validity: Duration,
}

impl AuthService {
    /// 협력자들을 주입하여 서비스 생성
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        user_directory: Arc<dyn UserDirectory>,
        token_issuer: Arc<dyn TokenIssuer>,
        token_validity: Duration,
    ) -> Self {
        Self {
            authenticator,
            user_directory,
            token_issuer,
            token_validity,
        }
    }

    /// 자격 증명을 액세스 토큰으로 교환
    ///
    /// # 인자
    ///
    /// * `credentials` - 사용자명/비밀번호 쌍
    ///
    /// # 반환값
    ///
    /// * `Ok(AccessToken)` - 주체와 역할이 클레임으로 내장된 서명 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredentials` - 인증 단계의 모든 실패
    ///   (단계 구분 불가, 의도된 동작)
    /// * `AppError::TokenIssuance` - 토큰 서명 실패 (서버 측 결함)
    pub async fn signin(&self, credentials: &AccountCredentials) -> AppResult<AccessToken> {
        log::info!("로그인 시도 - 사용자: {}", credentials.username);

        // 검증 실패 사유는 기록하되 호출자에게는 단일 에러만 노출합니다
        if let Err(e) = self
            .authenticator
            .verify(&credentials.username, &credentials.password)
            .await
        {
            log::info!("인증 실패 - 사용자: {} ({})", credentials.username, e);
            return Err(AppError::InvalidCredentials);
        }

        let account = match self
            .user_directory
            .find_by_username(&credentials.username)
            .await
        {
            Ok(Some(account)) => account,
            Ok(None) => {
                // 인증기는 통과했는데 디렉터리에 레코드가 없는 불일치 상태.
                // fail-closed: 동일한 인증 실패로 처리합니다
                log::warn!(
                    "인증은 통과했으나 디렉터리에 계정이 없습니다: {}",
                    credentials.username
                );
                return Err(AppError::InvalidCredentials);
            }
            Err(e) => {
                log::warn!(
                    "사용자 디렉터리 조회 실패 - 사용자: {} ({})",
                    credentials.username,
                    e
                );
                return Err(AppError::InvalidCredentials);
            }
        };

        if !account.enabled {
            log::warn!("비활성 계정의 로그인 시도: {}", credentials.username);
            return Err(AppError::InvalidCredentials);
        }

        let token = self
            .token_issuer
            .issue(&credentials.username, &account.roles, self.token_validity)
            .map_err(|e| match e {
                issuance @ AppError::TokenIssuance(_) => issuance,
                other => AppError::TokenIssuance(other.to_string()),
            })?;

        log::info!("로그인 성공 - 사용자: {}", credentials.username);
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::Utc;
    use futures_util::future::join_all;

    use super::*;
    use crate::config::JwtSettings;
    use crate::domain::entities::UserAccount;
    use crate::repositories::users::InMemoryUserDirectory;
    use crate::services::auth::token_service::JwtTokenService;

    /// 고정된 사용자명/비밀번호 테이블로 검증하는 테스트용 인증기
    struct StaticAuthenticator {
        passwords: HashMap<String, String>,
    }

    impl StaticAuthenticator {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                passwords: entries
                    .iter()
                    .map(|(u, p)| (u.to_string(), p.to_string()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl Authenticator for StaticAuthenticator {
        async fn verify(&self, username: &str, password: &str) -> AppResult<()> {
            match self.passwords.get(username) {
                Some(stored) if stored == password => Ok(()),
                _ => Err(AppError::InvalidCredentials),
            }
        }
    }

    /// 항상 내부 오류를 반환하는 인증기
    struct FaultyAuthenticator;

    #[async_trait]
    impl Authenticator for FaultyAuthenticator {
        async fn verify(&self, _username: &str, _password: &str) -> AppResult<()> {
            Err(AppError::Configuration("authenticator backend down".to_string()))
        }
    }

    /// 항상 조회에 실패하는 디렉터리
    struct FaultyDirectory;

    #[async_trait]
    impl UserDirectory for FaultyDirectory {
        async fn find_by_username(&self, _username: &str) -> AppResult<Option<UserAccount>> {
            Err(AppError::Configuration("directory backend down".to_string()))
        }
    }

    /// 항상 발급에 실패하는 토큰 발급기
    struct FailingIssuer;

    impl TokenIssuer for FailingIssuer {
        fn issue(
            &self,
            _subject: &str,
            _roles: &[String],
            _validity: Duration,
        ) -> AppResult<AccessToken> {
            Err(AppError::TokenIssuance("signing key unavailable".to_string()))
        }
    }

    fn token_service() -> JwtTokenService {
        JwtTokenService::new(JwtSettings::new(
            "test-secret",
            Duration::hours(1),
            Duration::days(30),
        ))
    }

    fn service_with_alice() -> AuthService {
        let directory = InMemoryUserDirectory::new()
            .with_account(UserAccount::new("alice", vec!["ADMIN".to_string()]));

        AuthService::new(
            Arc::new(StaticAuthenticator::new(&[("alice", "correctpass")])),
            Arc::new(directory),
            Arc::new(token_service()),
            Duration::hours(1),
        )
    }

    #[actix_web::test]
    async fn test_signin_success_embeds_subject_and_roles() {
        let service = service_with_alice();
        let credentials = AccountCredentials::new("alice", "correctpass");

        let token = service.signin(&credentials).await.unwrap();

        assert_eq!(token.username, "alice");
        assert!(token.authenticated);
        assert!(token.is_valid_at(Utc::now()));

        // 클레임에 주체와 역할이 내장되어 있어야 합니다
        let claims = token_service().verify_token(&token.access_token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert!(claims.roles.contains(&"ADMIN".to_string()));
    }

    #[actix_web::test]
    async fn test_signin_wrong_password() {
        let service = service_with_alice();
        let credentials = AccountCredentials::new("alice", "wrongpass");

        let result = service.signin(&credentials).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_signin_unknown_user_is_indistinguishable() {
        let service = service_with_alice();

        let wrong_password = service
            .signin(&AccountCredentials::new("alice", "wrongpass"))
            .await
            .unwrap_err();
        let unknown_user = service
            .signin(&AccountCredentials::new("ghost", "anything"))
            .await
            .unwrap_err();

        // 두 실패는 동일한 에러 종류와 메시지를 가져야 합니다
        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_user, AppError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[actix_web::test]
    async fn test_signin_authenticator_fault_collapses_to_invalid_credentials() {
        let directory = InMemoryUserDirectory::new()
            .with_account(UserAccount::new("alice", vec!["ADMIN".to_string()]));
        let service = AuthService::new(
            Arc::new(FaultyAuthenticator),
            Arc::new(directory),
            Arc::new(token_service()),
            Duration::hours(1),
        );

        let result = service.signin(&AccountCredentials::new("alice", "correctpass")).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_signin_verified_but_missing_in_directory_fails_closed() {
        // 인증기는 bob을 알지만 디렉터리에는 레코드가 없는 불일치 상태
        let service = AuthService::new(
            Arc::new(StaticAuthenticator::new(&[("bob", "correctpass")])),
            Arc::new(InMemoryUserDirectory::new()),
            Arc::new(token_service()),
            Duration::hours(1),
        );

        let result = service.signin(&AccountCredentials::new("bob", "correctpass")).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_signin_directory_fault_fails_closed() {
        let service = AuthService::new(
            Arc::new(StaticAuthenticator::new(&[("alice", "correctpass")])),
            Arc::new(FaultyDirectory),
            Arc::new(token_service()),
            Duration::hours(1),
        );

        let result = service.signin(&AccountCredentials::new("alice", "correctpass")).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_signin_disabled_account_is_rejected() {
        let directory = InMemoryUserDirectory::new()
            .with_account(UserAccount::disabled("alice", vec!["ADMIN".to_string()]));
        let service = AuthService::new(
            Arc::new(StaticAuthenticator::new(&[("alice", "correctpass")])),
            Arc::new(directory),
            Arc::new(token_service()),
            Duration::hours(1),
        );

        let result = service.signin(&AccountCredentials::new("alice", "correctpass")).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_signin_issuer_failure_is_server_fault() {
        let directory = InMemoryUserDirectory::new()
            .with_account(UserAccount::new("alice", vec!["ADMIN".to_string()]));
        let service = AuthService::new(
            Arc::new(StaticAuthenticator::new(&[("alice", "correctpass")])),
            Arc::new(directory),
            Arc::new(FailingIssuer),
            Duration::hours(1),
        );

        let result = service.signin(&AccountCredentials::new("alice", "correctpass")).await;

        assert!(matches!(result, Err(AppError::TokenIssuance(_))));
    }

    #[actix_web::test]
    async fn test_concurrent_signins_do_not_interfere() {
        let usernames: Vec<String> = (0..8).map(|i| format!("user{}", i)).collect();

        let entries: Vec<(String, String)> = usernames
            .iter()
            .map(|u| (u.clone(), format!("{}-pass", u)))
            .collect();
        let authenticator = StaticAuthenticator {
            passwords: entries.into_iter().collect(),
        };

        let mut directory = InMemoryUserDirectory::new();
        for username in &usernames {
            directory = directory.with_account(UserAccount::new(
                username.clone(),
                vec![format!("ROLE_{}", username)],
            ));
        }

        let service = Arc::new(AuthService::new(
            Arc::new(authenticator),
            Arc::new(directory),
            Arc::new(token_service()),
            Duration::hours(1),
        ));

        let signins = usernames.iter().map(|username| {
            let service = Arc::clone(&service);
            let credentials = AccountCredentials::new(username.clone(), format!("{}-pass", username));
            async move { service.signin(&credentials).await }
        });

        let results = join_all(signins).await;

        let verifier = token_service();
        for (username, result) in usernames.iter().zip(results) {
            let token = result.unwrap();
            assert_eq!(&token.username, username);

            let claims = verifier.verify_token(&token.access_token).unwrap();
            assert_eq!(&claims.sub, username);
            assert_eq!(claims.roles, vec![format!("ROLE_{}", username)]);
        }
    }
}
