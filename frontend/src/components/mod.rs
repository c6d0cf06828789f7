pub mod imports;

mod error_msg;
mod login;
mod logout;

pub use error_msg::ErrorMessage;
pub use login::Login;
pub use logout::Logout;
