use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

lazy_static! {
    // Best-effort syntactic check, not RFC 5322. Known to reject some valid
    // addresses (plus-addressing, quoted locals) and accept some invalid ones.
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern to be a valid regex");
}

/// Represents a syntactically valid email address.
#[derive(Debug)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<Self, String> {
        if EMAIL_PATTERN.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{s} is not a valid email address."))
        }
    }
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
