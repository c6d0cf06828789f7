use super::SubmitError;
use interfacing::{LoginForm, PasswordDigest};
use secrecy::{ExposeSecret, SecretString};

/// Username and password as typed, read once per submission.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: String, password: String) -> Self {
        Self {
            username,
            password: SecretString::new(password),
        }
    }

    /// Both fields must be filled in, nothing else is checked here.
    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.username.is_empty() || self.password.expose_secret().is_empty() {
            return Err(SubmitError::MissingCredentials);
        }
        Ok(())
    }

    pub fn into_form(self) -> LoginForm {
        LoginForm {
            username: self.username,
            password: PasswordDigest::from(self.password),
        }
    }
}
