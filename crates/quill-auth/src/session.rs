use std::sync::Arc;

use serde::Deserialize;

use quill_store::UserStore;
use quill_types::{Avatar, RecordId, User, UserPublic};

use crate::error::{AuthError, AuthResult};
use crate::password::PasswordHasher;
use crate::token::{TokenIssuer, TokenPair};

/// Registration input.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub avatar: Option<Avatar>,
}

/// Login input: username or email plus the password.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
}

/// Successful login: the sanitized user plus both tokens.
#[derive(Clone, Debug)]
pub struct LoginOutcome {
    pub user: UserPublic,
    pub tokens: TokenPair,
}

/// The account lifecycle over a [`UserStore`].
///
/// Every operation returns typed errors; the HTTP layer maps them to status
/// codes. Refresh tokens are single-slot per user: the slot stores the most
/// recently issued token, and presenting any other token — including one
/// that was valid before a rotation — fails.
pub struct SessionManager {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl SessionManager {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// The token issuer (the HTTP layer reads TTLs for cookie lifetimes).
    pub fn token_issuer(&self) -> &TokenIssuer {
        &self.tokens
    }

    /// Register a new account. The stored password is hashed; the returned
    /// user carries no credential fields.
    pub async fn register(&self, account: NewAccount) -> AuthResult<UserPublic> {
        let blank = [
            &account.username,
            &account.email,
            &account.password,
            &account.display_name,
        ]
        .iter()
        .any(|field| field.trim().is_empty());
        if blank {
            return Err(AuthError::Validation("all fields are required".into()));
        }
        let avatar = match account.avatar {
            Some(avatar) if !avatar.is_blank() => avatar,
            _ => return Err(AuthError::Validation("avatar is required".into())),
        };

        let password_hash = self.hasher.hash(&account.password)?;
        let user = User::new(
            account.username,
            account.email,
            account.display_name,
            avatar,
            password_hash,
        );
        let user = self.store.insert_user(user).await?;
        tracing::info!(username = %user.username, "user registered");
        Ok(user.public())
    }

    /// Log in by username or email. Issues a token pair and persists the
    /// refresh token in the user's slot.
    pub async fn login(&self, request: LoginRequest) -> AuthResult<LoginOutcome> {
        let identifier = request
            .username
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(request.email.as_deref().filter(|s| !s.trim().is_empty()))
            .ok_or_else(|| AuthError::Validation("username or email is required".into()))?;

        let mut user = self
            .store
            .user_by_login(identifier)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.hasher.verify(&request.password, &user.password_hash)? {
            tracing::warn!(username = %user.username, "failed login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let tokens = self.tokens.issue_pair(&user)?;
        user.refresh_token = Some(tokens.refresh_token.clone());
        let user = self.store.update_user(user).await?;
        tracing::info!(username = %user.username, "user logged in");
        Ok(LoginOutcome {
            user: user.public(),
            tokens,
        })
    }

    /// Rotate a refresh token. The presented token must verify AND match
    /// the stored slot; rotated-out tokens fail the second check.
    pub async fn refresh(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        let claims = self.tokens.verify_refresh(refresh_token)?;
        let id: RecordId = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;
        let mut user = self
            .store
            .user_by_id(&id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        if user.refresh_token.as_deref() != Some(refresh_token) {
            tracing::warn!(username = %user.username, "stale refresh token presented");
            return Err(AuthError::RefreshReused);
        }

        let tokens = self.tokens.issue_pair(&user)?;
        user.refresh_token = Some(tokens.refresh_token.clone());
        self.store.update_user(user).await?;
        Ok(tokens)
    }

    /// Clear the refresh slot; outstanding refresh tokens die with it.
    pub async fn logout(&self, user_id: &RecordId) -> AuthResult<()> {
        let mut user = self
            .store
            .user_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        user.refresh_token = None;
        self.store.update_user(user).await?;
        Ok(())
    }

    /// Change the password after re-proving the old one.
    pub async fn change_password(
        &self,
        user_id: &RecordId,
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> AuthResult<()> {
        if new_password.trim().is_empty() {
            return Err(AuthError::Validation("password is required".into()));
        }
        if new_password != confirm_password {
            return Err(AuthError::Validation(
                "new password and confirmation do not match".into(),
            ));
        }
        let mut user = self
            .store
            .user_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        if !self.hasher.verify(old_password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }
        user.password_hash = self.hasher.hash(new_password)?;
        user.touch();
        self.store.update_user(user).await?;
        Ok(())
    }

    /// Update display name and email.
    pub async fn update_account(
        &self,
        user_id: &RecordId,
        display_name: &str,
        email: &str,
    ) -> AuthResult<UserPublic> {
        if display_name.trim().is_empty() || email.trim().is_empty() {
            return Err(AuthError::Validation("all fields are required".into()));
        }
        let mut user = self
            .store
            .user_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        user.display_name = display_name.trim().to_string();
        user.email = email.trim().to_lowercase();
        user.touch();
        let user = self.store.update_user(user).await?;
        Ok(user.public())
    }

    /// Replace the avatar reference.
    pub async fn update_avatar(
        &self,
        user_id: &RecordId,
        avatar: Avatar,
    ) -> AuthResult<UserPublic> {
        if avatar.is_blank() {
            return Err(AuthError::Validation("avatar is required".into()));
        }
        let mut user = self
            .store
            .user_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        user.avatar = avatar;
        user.touch();
        let user = self.store.update_user(user).await?;
        Ok(user.public())
    }

    /// Resolve an access token to its (still existing) user. The request
    /// gate for every protected route.
    pub async fn verify_session(&self, access_token: &str) -> AuthResult<UserPublic> {
        let claims = self.tokens.verify_access(access_token)?;
        let id: RecordId = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;
        let user = self
            .store
            .user_by_id(&id)
            .await?
            .ok_or(AuthError::InvalidToken)?;
        Ok(user.public())
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("hasher", &self.hasher)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_store::{InMemoryStore, StoreError};

    fn manager() -> SessionManager {
        SessionManager::new(
            Arc::new(InMemoryStore::new()),
            PasswordHasher::new(4),
            TokenIssuer::new("access-secret", "refresh-secret", 900, 864_000),
        )
    }

    fn account(username: &str, email: &str) -> NewAccount {
        NewAccount {
            username: username.into(),
            email: email.into(),
            password: "secret".into(),
            display_name: "Display".into(),
            avatar: Some(Avatar::new("img", "https://img/a")),
        }
    }

    fn login_as(username: &str) -> LoginRequest {
        LoginRequest {
            username: Some(username.into()),
            email: None,
            password: "secret".into(),
        }
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn register_returns_sanitized_user() {
        let sessions = manager();
        let user = sessions.register(account("Alice", "A@X.com")).await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "a@x.com");
    }

    #[tokio::test]
    async fn register_rejects_blank_fields() {
        let sessions = manager();
        let mut blank = account("alice", "a@x.com");
        blank.password = "   ".into();
        assert!(matches!(
            sessions.register(blank).await,
            Err(AuthError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn register_requires_avatar() {
        let sessions = manager();
        let mut no_avatar = account("alice", "a@x.com");
        no_avatar.avatar = None;
        assert!(matches!(
            sessions.register(no_avatar).await,
            Err(AuthError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn register_duplicate_is_conflict() {
        let sessions = manager();
        sessions.register(account("alice", "a@x.com")).await.unwrap();
        let err = sessions
            .register(account("alice", "other@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Store(StoreError::Conflict(_))));
    }

    // -----------------------------------------------------------------------
    // Login
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn login_by_username_and_by_email() {
        let sessions = manager();
        sessions.register(account("alice", "a@x.com")).await.unwrap();

        let by_username = sessions.login(login_as("alice")).await.unwrap();
        assert_eq!(by_username.user.username, "alice");
        assert!(!by_username.tokens.access_token.is_empty());

        let by_email = sessions
            .login(LoginRequest {
                username: None,
                email: Some("a@x.com".into()),
                password: "secret".into(),
            })
            .await
            .unwrap();
        assert_eq!(by_email.user.username, "alice");
    }

    #[tokio::test]
    async fn login_requires_an_identifier() {
        let sessions = manager();
        let err = sessions
            .login(LoginRequest {
                username: None,
                email: None,
                password: "secret".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn login_unknown_user_is_not_found() {
        let sessions = manager();
        assert!(matches!(
            sessions.login(login_as("ghost")).await,
            Err(AuthError::UserNotFound)
        ));
    }

    #[tokio::test]
    async fn login_wrong_password_is_invalid_credentials() {
        let sessions = manager();
        sessions.register(account("alice", "a@x.com")).await.unwrap();
        let mut request = login_as("alice");
        request.password = "wrong".into();
        assert!(matches!(
            sessions.login(request).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    // -----------------------------------------------------------------------
    // Refresh rotation (single slot)
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn refresh_rotates_and_kills_the_old_token() {
        let sessions = manager();
        sessions.register(account("alice", "a@x.com")).await.unwrap();
        let outcome = sessions.login(login_as("alice")).await.unwrap();

        let rotated = sessions.refresh(&outcome.tokens.refresh_token).await.unwrap();
        assert_ne!(rotated.refresh_token, outcome.tokens.refresh_token);

        // The pre-rotation token no longer matches the slot.
        let err = sessions
            .refresh(&outcome.tokens.refresh_token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::RefreshReused));

        // The rotated token still works, exactly once more.
        sessions.refresh(&rotated.refresh_token).await.unwrap();
    }

    #[tokio::test]
    async fn refresh_rejects_garbage() {
        let sessions = manager();
        assert!(matches!(
            sessions.refresh("not.a.jwt").await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn logout_clears_the_slot() {
        let sessions = manager();
        let registered = sessions.register(account("alice", "a@x.com")).await.unwrap();
        let outcome = sessions.login(login_as("alice")).await.unwrap();

        sessions.logout(&registered.id).await.unwrap();
        assert!(matches!(
            sessions.refresh(&outcome.tokens.refresh_token).await,
            Err(AuthError::RefreshReused)
        ));
    }

    // -----------------------------------------------------------------------
    // Password change
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn change_password_requires_matching_confirmation() {
        let sessions = manager();
        let user = sessions.register(account("alice", "a@x.com")).await.unwrap();
        let err = sessions
            .change_password(&user.id, "secret", "new", "different")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn change_password_requires_correct_old_password() {
        let sessions = manager();
        let user = sessions.register(account("alice", "a@x.com")).await.unwrap();
        let err = sessions
            .change_password(&user.id, "wrong", "new", "new")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn change_password_takes_effect() {
        let sessions = manager();
        let user = sessions.register(account("alice", "a@x.com")).await.unwrap();
        sessions
            .change_password(&user.id, "secret", "updated", "updated")
            .await
            .unwrap();

        let mut request = login_as("alice");
        request.password = "updated".into();
        sessions.login(request).await.unwrap();

        assert!(matches!(
            sessions.login(login_as("alice")).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    // -----------------------------------------------------------------------
    // Profile updates
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn update_account_changes_profile() {
        let sessions = manager();
        let user = sessions.register(account("alice", "a@x.com")).await.unwrap();
        let updated = sessions
            .update_account(&user.id, "New Name", "New@X.com")
            .await
            .unwrap();
        assert_eq!(updated.display_name, "New Name");
        assert_eq!(updated.email, "new@x.com");
    }

    #[tokio::test]
    async fn update_account_rejects_taken_email() {
        let sessions = manager();
        sessions.register(account("alice", "a@x.com")).await.unwrap();
        let bob = sessions.register(account("bob", "b@x.com")).await.unwrap();
        let err = sessions
            .update_account(&bob.id, "Bob", "a@x.com")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Store(StoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn update_avatar_rejects_blank() {
        let sessions = manager();
        let user = sessions.register(account("alice", "a@x.com")).await.unwrap();
        let err = sessions
            .update_avatar(&user.id, Avatar::new("", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    // -----------------------------------------------------------------------
    // Session verification
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn verify_session_resolves_the_user() {
        let sessions = manager();
        sessions.register(account("alice", "a@x.com")).await.unwrap();
        let outcome = sessions.login(login_as("alice")).await.unwrap();
        let identity = sessions
            .verify_session(&outcome.tokens.access_token)
            .await
            .unwrap();
        assert_eq!(identity.username, "alice");
    }

    #[tokio::test]
    async fn verify_session_rejects_refresh_tokens() {
        let sessions = manager();
        sessions.register(account("alice", "a@x.com")).await.unwrap();
        let outcome = sessions.login(login_as("alice")).await.unwrap();
        assert!(matches!(
            sessions.verify_session(&outcome.tokens.refresh_token).await,
            Err(AuthError::InvalidToken)
        ));
    }
}
