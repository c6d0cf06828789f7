mod imports;

mod error_body;
mod login_form;
mod logout_form;
mod password_digest;

pub use error_body::ErrorBody;
pub use login_form::LoginForm;
pub use logout_form::LogoutForm;
pub use password_digest::{digest, InvalidDigest, PasswordDigest, DIGEST_HEX_LEN};
