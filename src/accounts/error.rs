use thiserror::Error;

/// Failure taxonomy for the account flows.
///
/// The first three kinds are user-correctable and their `Display` strings go
/// to the client verbatim. `StorageUnavailable` is an infrastructure fault:
/// its detail is logged server-side and the client only ever sees a generic
/// retry-later message. Note that `AccountNotFound` and `InvalidCredentials`
/// carry distinct messages, so a caller can tell whether an email is
/// registered.
#[derive(Debug, Error)]
pub enum AccountError {
    /// An account with this email has already been registered.
    #[error("User already exists with the email {0}. Please try again with a different email.")]
    DuplicateAccount(String),

    /// No account exists for this email.
    #[error("User with the email {0} is not signed up. Please sign up first!")]
    AccountNotFound(String),

    /// The password does not match the stored hash.
    #[error("Invalid Password")]
    InvalidCredentials,

    /// The credential store or the hasher failed; detail stays server-side.
    #[error("credential store unavailable: {0}")]
    StorageUnavailable(String),
}

// Infrastructure failures (store, hasher) fold into StorageUnavailable with
// the full context chain kept for the logs.
impl From<anyhow::Error> for AccountError {
    fn from(e: anyhow::Error) -> Self {
        AccountError::StorageUnavailable(format!("{e:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_account_names_the_email() {
        let err = AccountError::DuplicateAccount("a@x.com".to_string());
        assert_eq!(
            err.to_string(),
            "User already exists with the email a@x.com. Please try again with a different email."
        );
    }

    #[test]
    fn account_not_found_names_the_email() {
        let err = AccountError::AccountNotFound("a@x.com".to_string());
        assert_eq!(
            err.to_string(),
            "User with the email a@x.com is not signed up. Please sign up first!"
        );
    }

    #[test]
    fn invalid_credentials_display() {
        assert_eq!(AccountError::InvalidCredentials.to_string(), "Invalid Password");
    }

    #[test]
    fn anyhow_conversion_keeps_the_cause_chain() {
        let cause = anyhow::anyhow!("connection refused").context("find_by_email");
        let err: AccountError = cause.into();
        let text = err.to_string();
        assert!(text.contains("find_by_email"));
        assert!(text.contains("connection refused"));
    }
}
