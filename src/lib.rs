pub mod configuration;
pub mod domain;
mod error;
pub mod routes;
mod service;
pub mod signup_client;
mod state;
pub mod telemetry;

use axum::{routing::IntoMakeService, Router, Server};
use configuration::Settings;
use hyper::server::conn::AddrIncoming;
use signup_client::SignupClient;
use state::AppState;
use std::net::TcpListener;

pub struct App {
    port: u16,
    server: Server<AddrIncoming, IntoMakeService<Router>>,
}

impl App {
    /// Build the app from its configuration, binding the listener without
    /// starting to serve requests yet.
    pub fn build(configuration: Settings) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(configuration.application().address())?;
        let port = listener.local_addr()?.port();

        let signup_client = SignupClient::try_from(configuration.auth_service())
            .map_err(|e| anyhow::anyhow!(e))?;
        let app_state = AppState::create(
            signup_client,
            configuration.application().hmac_secret(),
        );
        let router = routes::build_router(&app_state);

        let server = Server::from_tcp(listener)?.serve(router.into_make_service());

        Ok(Self { port, server })
    }

    /// The port the app is bound to. Useful when the configuration asked for
    /// port 0 and the OS picked one.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve requests until the process is stopped.
    pub async fn run_until_stopped(self) -> hyper::Result<()> {
        tracing::info!("Server running at port {}", self.port);
        self.server.await
    }
}
