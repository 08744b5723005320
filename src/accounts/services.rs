use std::sync::Arc;

use tracing::debug;

use crate::accounts::dto::Identity;
use crate::accounts::error::AccountError;
use crate::accounts::password;
use crate::accounts::store::{CredentialStore, User};

/// Stateless account flows over an injected credential store.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn CredentialStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Register a new account: pre-check the email, hash the password,
    /// persist one record.
    ///
    /// The pre-check is not atomic with the insert, so two concurrent
    /// sign-ups for the same email can both succeed.
    pub async fn register(
        &self,
        username: Option<String>,
        email: &str,
        password: &str,
    ) -> Result<Identity, AccountError> {
        if self.store.find_by_email(email).await?.is_some() {
            return Err(AccountError::DuplicateAccount(email.to_string()));
        }

        let password_hash = password::hash_password(password)?;
        let user = self
            .store
            .create(username.as_deref(), email, &password_hash)
            .await?;

        debug!(email = %user.email, "account created");
        Ok(identity_of(user))
    }

    /// Look up the record for this email and verify the password against
    /// its stored hash.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AccountError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AccountError::AccountNotFound(email.to_string()))?;

        if !password::verify_password(password, &user.password_hash)? {
            return Err(AccountError::InvalidCredentials);
        }

        debug!(email = %user.email, "credentials verified");
        Ok(identity_of(user))
    }

    /// Administrative listing of every stored record.
    pub async fn list_accounts(&self) -> anyhow::Result<Vec<User>> {
        self.store.list_all().await
    }
}

fn identity_of(user: User) -> Identity {
    Identity {
        username: user.username,
        email: user.email,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::store::doubles::{BrokenStore, MemoryStore};

    fn service() -> (Arc<MemoryStore>, AccountService) {
        let store = Arc::new(MemoryStore::default());
        (store.clone(), AccountService::new(store))
    }

    #[tokio::test]
    async fn register_then_authenticate_returns_the_same_identity() {
        let (_, svc) = service();

        let registered = svc
            .register(Some("alice".to_string()), "a@x.com", "pw1")
            .await
            .expect("register should succeed");
        assert_eq!(registered.username.as_deref(), Some("alice"));
        assert_eq!(registered.email, "a@x.com");

        let authenticated = svc
            .authenticate("a@x.com", "pw1")
            .await
            .expect("authenticate should succeed");
        assert_eq!(authenticated.username.as_deref(), Some("alice"));
        assert_eq!(authenticated.email, "a@x.com");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_regardless_of_password() {
        let (_, svc) = service();
        svc.register(None, "a@x.com", "pw1").await.unwrap();

        let err = svc
            .register(Some("other".to_string()), "a@x.com", "completely-different")
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::DuplicateAccount(ref email) if email == "a@x.com"));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let (_, svc) = service();
        svc.register(None, "a@x.com", "pw1").await.unwrap();

        let err = svc.authenticate("a@x.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AccountError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_email_is_account_not_found() {
        let (_, svc) = service();

        let err = svc.authenticate("nobody@x.com", "pw1").await.unwrap_err();
        assert!(matches!(err, AccountError::AccountNotFound(ref email) if email == "nobody@x.com"));
    }

    #[tokio::test]
    async fn stored_hash_is_not_the_plaintext() {
        let (store, svc) = service();
        svc.register(None, "a@x.com", "pw1").await.unwrap();

        let record = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_ne!(record.password_hash, "pw1");
        assert!(record.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn registration_failure_leaves_no_record() {
        let (store, svc) = service();
        svc.register(None, "a@x.com", "pw1").await.unwrap();
        svc.register(None, "a@x.com", "pw2").await.unwrap_err();

        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn broken_store_surfaces_storage_unavailable() {
        let svc = AccountService::new(Arc::new(BrokenStore));

        let register_err = svc.register(None, "a@x.com", "pw1").await.unwrap_err();
        assert!(matches!(register_err, AccountError::StorageUnavailable(_)));

        let login_err = svc.authenticate("a@x.com", "pw1").await.unwrap_err();
        assert!(matches!(login_err, AccountError::StorageUnavailable(_)));

        assert!(svc.list_accounts().await.is_err());
    }
}
