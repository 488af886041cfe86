use crate::{configuration::AuthServiceSettings, domain::NewSignup};
use reqwest::{Client, StatusCode, Url};
use secrecy::ExposeSecret;

/// Client for the remote authentication service that performs the actual
/// account creation.
#[derive(Debug)]
pub struct SignupClient {
    base_url: Url,
    http_client: Client,
}

impl SignupClient {
    /// Create a new signup client against the given base url.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http_client: Client::new(),
        }
    }

    /// Submit a validated signup to the authentication service.
    ///
    /// This is a single attempt: no retry and no timeout beyond the transport
    /// default. The response body on success is owned by the remote service
    /// and returned verbatim.
    pub async fn create_account(
        &self,
        new_signup: &NewSignup,
    ) -> Result<serde_json::Value, SignupClientError> {
        let url = self
            .base_url
            .join("signup")
            .expect("url to always be valid at this point");
        let request_body = SignupRequest::from(new_signup);

        let response = self
            .http_client
            .post(url)
            .json(&request_body)
            .send()
            .await?;

        if response.status() == StatusCode::OK {
            Ok(response.json().await?)
        } else {
            let status = response.status();
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| "Unknown error occurred".to_string());
            tracing::warn!("Signup rejected by the auth service ({status}): {detail}");
            Err(SignupClientError::Rejected(detail))
        }
    }
}

impl TryFrom<&AuthServiceSettings> for SignupClient {
    type Error = String;

    fn try_from(config: &AuthServiceSettings) -> Result<Self, Self::Error> {
        Ok(Self::new(config.url().map_err(|e| {
            tracing::error!("Unable to parse the auth service's base url: {e}");
            "Auth service base url is invalid".to_string()
        })?))
    }
}

#[derive(thiserror::Error)]
pub enum SignupClientError {
    /// The service answered with a non-200 status. Carries the `detail` field
    /// of the error body when present, a generic message otherwise.
    #[error("Error: {0}")]
    Rejected(String),
    /// The request never completed: refused connection, DNS failure, timeout,
    /// or an unreadable response body.
    #[error("Connection error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Wire format of the signup payload. All keys are always present; blank
/// fields are sent as empty strings.
#[derive(serde::Serialize)]
struct SignupRequest<'a> {
    email: &'a str,
    full_name: &'a str,
    profile_pic_url: &'a str,
    job_role: &'a str,
    company_name: &'a str,
    location: &'a str,
    password: &'a str,
}

impl<'a> From<&'a NewSignup> for SignupRequest<'a> {
    fn from(new_signup: &'a NewSignup) -> Self {
        Self {
            email: new_signup.email.as_ref(),
            full_name: &new_signup.full_name,
            profile_pic_url: &new_signup.profile_pic_url,
            job_role: &new_signup.job_role,
            company_name: &new_signup.company_name,
            location: &new_signup.location,
            password: new_signup.password.expose_secret(),
        }
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}
