use planting_guide::configuration::get_configuration;
use planting_guide::startup::Application;

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_index(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_form(&self, postal_code: &str, crop: &str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/", &self.address))
            .form(&[("postalCode", postal_code), ("crop", crop)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_planting_info(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/planting-info", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // random OS port, no artificial latency
        c.application.port = 0;
        c.lookup.simulated_latency_milliseconds = 0;
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let address = format!("http://127.0.0.1:{}", application.port());
    tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        api_client: reqwest::Client::new(),
    }
}
