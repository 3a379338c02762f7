use contact_relay::configuration::get_configuration;
use contact_relay::startup::Application;
use contact_relay::telemetry;
use once_cell::sync::Lazy;
use wiremock::MockServer;

pub const ALLOWED_ORIGIN: &str = "https://www.example.com";

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // The sink is part of the type returned by `get_subscriber`, hence the two branches.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber);
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: impl Into<reqwest::Body>) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/contact", &self.address))
            .header("Content-Type", "application/json")
            .header("Origin", ALLOWED_ORIGIN)
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_json(&self, body: &serde_json::Value) -> reqwest::Response {
        self.post_contact(body.to_string()).await
    }
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed. All other
    // invocations will instead skip execution.
    Lazy::force(&TRACING);

    // Launch a mock server to stand in for the email provider's API
    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c.application.max_body_bytes = 1024;
        c.email_client.base_url = email_server.uri();
        c.email_client.sender_email = "no-reply@example.com".into();
        c.email_client.recipient_email = "inbox@example.com".into();
        c.email_client.timeout_milliseconds = 500;
        c.contact.allowed_origin = ALLOWED_ORIGIN.into();
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let address = format!("http://127.0.0.1:{}", application.port());
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        email_server,
        api_client: reqwest::Client::new(),
    }
}

/// Every response, whatever its status, must let the browser on `ALLOWED_ORIGIN` read it.
pub fn assert_cors_headers(response: &reqwest::Response) {
    let headers = response.headers();
    assert_eq!(
        headers["Access-Control-Allow-Origin"],
        ALLOWED_ORIGIN,
        "Wrong allowed origin for a {} response",
        response.status()
    );
    assert_eq!(
        headers["Access-Control-Allow-Headers"],
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token"
    );
    assert_eq!(headers["Access-Control-Allow-Methods"], "OPTIONS,POST");
}
