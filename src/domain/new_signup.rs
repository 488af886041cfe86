use super::{EmailAddress, Password};

/// Represents a signup attempt whose fields have passed validation.
///
/// The profile fields are free text the remote service accepts as-is; empty
/// strings are allowed and forwarded unchanged.
#[derive(Debug)]
pub struct NewSignup {
    pub email: EmailAddress,
    pub password: Password,
    pub full_name: String,
    pub profile_pic_url: String,
    pub job_role: String,
    pub company_name: String,
    pub location: String,
}
