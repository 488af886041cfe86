use http::StatusCode;
use once_cell::sync::Lazy;
use signup_portal::{
    configuration::get_configuration,
    telemetry::{get_subscriber, init_subscriber},
    App,
};
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber("test".into(), std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber("test".into(), std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub address: String,
    /// Stands in for the remote authentication service.
    pub auth_server: MockServer,
    api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_signup_html(&self) -> String {
        self.api_client
            .get(format!("{}/signup", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
            .text()
            .await
            .expect("Failed to read response body.")
    }

    pub async fn post_signup<Body: serde::Serialize>(&self, body: &Body) -> reqwest::Response {
        self.api_client
            .post(format!("{}/signup", self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_signup_raw(&self, body: String) -> reqwest::Response {
        self.api_client
            .post(format!("{}/signup", self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Spawn an instance of the app on a random port, pointed at a mock
/// authentication service.
pub async fn spawn_app() -> TestApp {
    let auth_server = MockServer::start().await;
    let base_url = auth_server.uri();
    spawn_app_with_auth_service(auth_server, base_url).await
}

/// Spawn an instance of the app whose auth service base url points at a port
/// nothing listens on, to exercise transport failures.
pub async fn spawn_app_with_unreachable_auth_service() -> TestApp {
    let auth_server = MockServer::start().await;
    // Port 1 is privileged and virtually never bound.
    spawn_app_with_auth_service(auth_server, "http://127.0.0.1:1".to_string()).await
}

async fn spawn_app_with_auth_service(auth_server: MockServer, base_url: String) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration");

        // Make OS choose a random port.
        c.application.port = 0;
        c.auth_service.base_url = base_url;

        c
    };

    let app = App::build(configuration).expect("Failed to build the application");
    let address = format!("http://127.0.0.1:{}", app.port());

    // Start server
    let _ = tokio::spawn(app.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .expect("Failed to build api client");

    TestApp {
        address,
        auth_server,
        api_client,
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
