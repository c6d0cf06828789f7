use crate::imports::*;
use crate::PasswordDigest;

/// Body of the login request.
///
/// The password never leaves the browser in plain text, only its digest does.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: PasswordDigest,
}
