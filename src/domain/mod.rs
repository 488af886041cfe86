mod email_address;
mod new_signup;
mod password;

pub use email_address::EmailAddress;
pub use new_signup::NewSignup;
pub use password::{Password, PasswordPolicyError};
