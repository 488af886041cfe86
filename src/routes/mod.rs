use crate::state::AppState;
use axum::Router;

pub mod health;
pub mod signup;

/// Build the router for the application.
pub fn build_router(app_state: &AppState) -> Router {
    use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
    use tracing::Level;

    Router::new()
        .nest("/health", health::create_router())
        .nest("/signup", signup::create_router())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(app_state.clone())
}
