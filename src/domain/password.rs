use secrecy::{ExposeSecret, Secret};

const MIN_LENGTH: usize = 8;

/// A password that satisfies the signup strength rules.
///
/// The only way to obtain one is through [`Password::parse`], so holders can
/// rely on the rules having been checked. The inner value stays wrapped in a
/// [`Secret`] and is only exposed when the signup payload is serialized.
#[derive(Debug)]
pub struct Password(Secret<String>);

impl Password {
    /// Check the candidate against the strength rules.
    ///
    /// The rules are evaluated in a fixed order and only the first violated
    /// one is reported, even when several are violated at once.
    pub fn parse(candidate: Secret<String>) -> Result<Self, PasswordPolicyError> {
        let raw = candidate.expose_secret();

        if raw.chars().count() < MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort);
        }
        if !raw.chars().any(char::is_uppercase) {
            return Err(PasswordPolicyError::MissingUppercase);
        }
        if !raw.chars().any(char::is_lowercase) {
            return Err(PasswordPolicyError::MissingLowercase);
        }
        if !raw.chars().any(char::is_numeric) {
            return Err(PasswordPolicyError::MissingDigit);
        }

        Ok(Self(candidate))
    }
}

impl ExposeSecret<String> for Password {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {MIN_LENGTH} characters long")]
    TooShort,
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
    #[error("Password must contain at least one number")]
    MissingDigit,
}
