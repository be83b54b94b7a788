use crate::domain::admin::{AdminRole, AdminUser};
use crate::store::{KeyValueStore, StoreError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

const USERS_KEY: &str = "admin_users";
const SESSION_KEY: &str = "admin_current_user";
const PASSWORD_SALT: &str = "nomadworx_salt";

pub const SUPER_ADMIN_INVITE_CODE: &str = "NOMADWORX-SUPER-2024";
pub const ADMIN_INVITE_CODE: &str = "NOMADWORX-ADMIN-2024";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username or email already registered")]
    DuplicateUser,
    #[error("invalid invite code for role")]
    InvalidInviteCode,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to encode user records: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: AdminRole,
    pub invite_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredAdminUser {
    #[serde(flatten)]
    user: AdminUser,
    password_hash: String,
}

#[derive(Clone)]
pub struct AdminAuthService {
    store: Arc<dyn KeyValueStore>,
}

impl AdminAuthService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Elevated roles require an invite code; managers self-serve. Passwords
    /// are kept as a salted SHA-256 hex digest, never in the clear. The new
    /// user is signed in on success.
    pub fn signup(&self, request: SignupRequest) -> Result<AdminUser, AuthError> {
        match request.role {
            AdminRole::SuperAdmin if request.invite_code.as_deref() != Some(SUPER_ADMIN_INVITE_CODE) => {
                return Err(AuthError::InvalidInviteCode);
            }
            AdminRole::Admin if request.invite_code.as_deref() != Some(ADMIN_INVITE_CODE) => {
                return Err(AuthError::InvalidInviteCode);
            }
            _ => {}
        }

        let mut users = self.load_users()?;
        if users
            .iter()
            .any(|u| u.user.username == request.username || u.user.email == request.email)
        {
            return Err(AuthError::DuplicateUser);
        }

        let now = chrono::Utc::now();
        let user = AdminUser {
            id: Uuid::new_v4(),
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            role: request.role,
            created_at: now,
            last_login: Some(now),
        };

        users.push(StoredAdminUser {
            user: user.clone(),
            password_hash: hash_password(&request.password),
        });
        self.save_users(&users)?;
        self.save_session(&user)?;

        tracing::info!("admin user {} signed up with role {:?}", user.username, user.role);
        Ok(user)
    }

    /// Verifies the digest and stamps `last_login`. Unknown usernames and bad
    /// passwords get the same error.
    pub fn login(&self, username: &str, password: &str) -> Result<AdminUser, AuthError> {
        let mut users = self.load_users()?;
        let expected = hash_password(password);

        let found = users
            .iter_mut()
            .find(|u| u.user.username == username && u.password_hash == expected);
        let Some(stored) = found else {
            tracing::warn!("failed login for username {}", username);
            return Err(AuthError::InvalidCredentials);
        };

        stored.user.last_login = Some(chrono::Utc::now());
        let user = stored.user.clone();
        self.save_users(&users)?;
        self.save_session(&user)?;

        tracing::info!("admin user {} logged in", user.username);
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(SESSION_KEY)?;
        Ok(())
    }

    pub fn current_user(&self) -> Result<Option<AdminUser>, AuthError> {
        let Some(raw) = self.store.get(SESSION_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                tracing::warn!("stored admin session is corrupted, discarding: {}", err);
                self.store.remove(SESSION_KEY)?;
                Ok(None)
            }
        }
    }

    fn load_users(&self) -> Result<Vec<StoredAdminUser>, AuthError> {
        let Some(raw) = self.store.get(USERS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(users) => Ok(users),
            Err(err) => {
                tracing::warn!("stored admin users failed to parse, starting empty: {}", err);
                Ok(Vec::new())
            }
        }
    }

    fn save_users(&self, users: &[StoredAdminUser]) -> Result<(), AuthError> {
        let raw = serde_json::to_string(users).map_err(|err| AuthError::Encode(err.to_string()))?;
        self.store.set(USERS_KEY, &raw)?;
        Ok(())
    }

    fn save_session(&self, user: &AdminUser) -> Result<(), AuthError> {
        let raw = serde_json::to_string(user).map_err(|err| AuthError::Encode(err.to_string()))?;
        self.store.set(SESSION_KEY, &raw)?;
        Ok(())
    }
}

fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(PASSWORD_SALT.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> AdminAuthService {
        AdminAuthService::new(Arc::new(MemoryStore::new()))
    }

    fn manager_signup(username: &str, email: &str) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "woodgrain42".to_string(),
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            role: AdminRole::Manager,
            invite_code: None,
        }
    }

    #[test]
    fn signup_then_login_round_trips() {
        let auth = service();
        let created = auth.signup(manager_signup("asha", "asha@nomadworx.com")).unwrap();
        assert_eq!(created.role, AdminRole::Manager);

        auth.logout().unwrap();
        assert!(auth.current_user().unwrap().is_none());

        let user = auth.login("asha", "woodgrain42").unwrap();
        assert_eq!(user.id, created.id);
        assert!(user.last_login.is_some());
        assert_eq!(auth.current_user().unwrap().unwrap().id, created.id);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let auth = service();
        auth.signup(manager_signup("asha", "asha@nomadworx.com")).unwrap();
        assert!(matches!(
            auth.login("asha", "driftwood"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("nobody", "woodgrain42"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn duplicate_username_or_email_is_rejected() {
        let auth = service();
        auth.signup(manager_signup("asha", "asha@nomadworx.com")).unwrap();
        assert!(matches!(
            auth.signup(manager_signup("asha", "other@nomadworx.com")),
            Err(AuthError::DuplicateUser)
        ));
        assert!(matches!(
            auth.signup(manager_signup("other", "asha@nomadworx.com")),
            Err(AuthError::DuplicateUser)
        ));
    }

    #[test]
    fn elevated_roles_require_matching_invite_code() {
        let auth = service();

        let mut request = manager_signup("root", "root@nomadworx.com");
        request.role = AdminRole::SuperAdmin;
        assert!(matches!(auth.signup(request.clone()), Err(AuthError::InvalidInviteCode)));

        request.invite_code = Some(ADMIN_INVITE_CODE.to_string());
        assert!(matches!(auth.signup(request.clone()), Err(AuthError::InvalidInviteCode)));

        request.invite_code = Some(SUPER_ADMIN_INVITE_CODE.to_string());
        assert!(auth.signup(request).is_ok());
    }

    #[test]
    fn corrupted_user_blob_starts_empty_instead_of_failing() {
        let store = Arc::new(MemoryStore::new());
        store.set(USERS_KEY, "not json").unwrap();

        let auth = AdminAuthService::new(store);
        assert!(matches!(
            auth.login("asha", "woodgrain42"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(auth.signup(manager_signup("asha", "asha@nomadworx.com")).is_ok());
    }
}
