use crate::service::flash_message::FlashMessage;
use askama::Template;
use axum::response::IntoResponse;

/// Return a view that renders the signup form, together with any feedback
/// message left behind by a previous submission attempt.
#[tracing::instrument(name = "Signup form page", skip(flash))]
pub async fn signup_form(flash: FlashMessage) -> impl IntoResponse {
    SignupTemplate {
        message: flash.get_message(),
    }
}

#[derive(Template)]
#[template(path = "signup.html")]
struct SignupTemplate {
    message: Option<String>,
}
