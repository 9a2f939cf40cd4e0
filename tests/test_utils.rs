use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use portfolio_api::{
    client::ApiClient,
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    web::cors,
    AppState,
};
use reqwest::Client;
use serde_json::Value;
use std::{net::TcpListener, sync::Arc, time::Duration};

#[derive(Clone)]
pub struct TestApp {
    pub state: Arc<AppState>,
    pub address: String,
    pub client: Client,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config()).await
    }

    pub async fn spawn_with(config: AppConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = Arc::new(AppState::new(&config).expect("Failed to build app state"));

        let state_clone = state.clone();
        let server_config = config.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::from(state_clone.clone()))
                .wrap(NormalizePath::trim())
                .wrap(cors(&server_config))
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(config.worker_count)
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client.get(&format!("{}/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            state,
            address,
            client,
            config,
        }
    }

    #[allow(dead_code)]
    pub fn api(&self) -> ApiClient {
        ApiClient::with_client(self.client.clone(), &self.address)
    }

    #[allow(dead_code)]
    pub async fn get(&self, path_and_query: &str) -> reqwest::Response {
        self.client
            .get(&format!("{}{}", self.address, path_and_query))
            .send()
            .await
            .expect("Failed to execute request")
    }

    #[allow(dead_code)]
    pub async fn get_json(&self, path_and_query: &str) -> (reqwest::StatusCode, Value) {
        let response = self.get(path_and_query).await;
        let status = response.status();
        let body = response.json::<Value>().await.expect("Response was not JSON");
        (status, body)
    }

    #[allow(dead_code)]
    pub async fn post_contact(&self, body: &Value) -> (reqwest::StatusCode, Value) {
        let response = self
            .client
            .post(&format!("{}/contact", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to submit contact form");
        let status = response.status();
        let body = response.json::<Value>().await.expect("Response was not JSON");
        (status, body)
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Portfolio API Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        cors_allowed_origins: vec!["*".to_string()],
        default_per_page: 10,
        max_per_page: 100,
    }
}

#[allow(dead_code)]
pub fn slugs(posts: &Value) -> Vec<String> {
    posts
        .as_array()
        .expect("expected an array")
        .iter()
        .map(|p| p["slug"].as_str().unwrap_or_default().to_string())
        .collect()
}
