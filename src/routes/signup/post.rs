use crate::{
    domain::{EmailAddress, NewSignup, Password, PasswordPolicyError},
    service::flash_message::FlashMessage,
    signup_client::SignupClient,
};
use askama::Template;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use secrecy::{ExposeSecret, Secret};
use std::sync::Arc;

/// Handle a signup submission: validate the form fields and, only once they
/// all pass, forward the payload to the authentication service.
#[tracing::instrument(
    name = "Submit a signup attempt",
    skip(client, flash, form),
    fields(signup_email = %form.email)
)]
pub async fn signup(
    State(client): State<Arc<SignupClient>>,
    flash: FlashMessage,
    Form(form): Form<FormData>,
) -> Response {
    let new_signup = match NewSignup::try_from(form) {
        Ok(x) => x,
        Err(e) => {
            tracing::warn!("Rejected signup submission: {e}");
            return signup_redirect(flash, e.to_string());
        }
    };

    match client.create_account(&new_signup).await {
        Ok(payload) => AccountCreatedTemplate {
            payload: serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string()),
        }
        .into_response(),
        Err(e) => {
            tracing::warn!(error.cause_chain = ?e, "Signup was not accepted");
            signup_redirect(flash, e.to_string())
        }
    }
}

fn signup_redirect(flash: FlashMessage, message: String) -> Response {
    (flash.set_message(message), Redirect::to("/signup")).into_response()
}

#[derive(serde::Deserialize)]
pub struct FormData {
    email: String,
    full_name: String,
    profile_pic_url: String,
    password: Secret<String>,
    confirm_password: Secret<String>,
    job_role: String,
    company_name: String,
    location: String,
}

impl TryFrom<FormData> for NewSignup {
    type Error = SubmissionError;

    /// The checks run in a fixed order and the flow halts on the first
    /// failure, so at most one message reaches the user per attempt.
    fn try_from(form: FormData) -> Result<Self, Self::Error> {
        if form.email.is_empty()
            || form.password.expose_secret().is_empty()
            || form.confirm_password.expose_secret().is_empty()
        {
            return Err(SubmissionError::MissingRequiredFields);
        }

        let email = EmailAddress::parse(form.email).map_err(|e| {
            tracing::debug!("{e}");
            SubmissionError::InvalidEmail
        })?;

        if form.password.expose_secret() != form.confirm_password.expose_secret() {
            return Err(SubmissionError::PasswordMismatch);
        }

        let password = Password::parse(form.password)?;

        Ok(Self {
            email,
            password,
            full_name: form.full_name,
            profile_pic_url: form.profile_pic_url,
            job_role: form.job_role,
            company_name: form.company_name,
            location: form.location,
        })
    }
}

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("Please fill in all required fields (Email and Password)")]
    MissingRequiredFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error(transparent)]
    WeakPassword(#[from] PasswordPolicyError),
}

#[derive(Template)]
#[template(path = "success.html")]
struct AccountCreatedTemplate {
    payload: String,
}
