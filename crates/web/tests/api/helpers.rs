use auth_core::TokenService;
use fake::faker::internet::en::SafeEmail;
use fake::Fake;
use once_cell::sync::Lazy;
use web::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    /// Verifier sharing the application's configured secret, so tests can
    /// check what the endpoint hands out.
    pub token_service: TokenService,
    pub operator: TestOperator,
}

pub struct TestOperator {
    pub subject_id: String,
}

impl TestOperator {
    pub fn generate() -> Self {
        Self {
            subject_id: SafeEmail().fake(),
        }
    }
}

impl TestApp {
    pub async fn get_healthcheck(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/health_check", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_token(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/token", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    // Singleton Pattern
    Lazy::force(&TRACING);

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration");
        // Wildcard port, the system will find available port
        c.application.port = 0;
        c
    };
    let token_service = TokenService::new(configuration.application.hmac_secret.clone());
    let app = Application::build(configuration.clone())
        .await
        .expect("Failed to build application");
    let port = app.port();
    let address = format!("http://127.0.0.1:{}", port);

    // Run the application
    let _ = tokio::spawn(app.run_until_stopped());
    TestApp {
        address,
        port,
        api_client,
        token_service,
        operator: TestOperator::generate(),
    }
}
