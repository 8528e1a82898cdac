use envconfig::Envconfig;
use http::{Method, StatusCode};
use std::collections::HashMap;
use tokio::net::TcpListener;
use webhook_dispatcher::{config::WebhookConfig, server::Server};

pub struct TestServer {
    pub port: u16,
    pub client: reqwest::Client,
    pub config: WebhookConfig,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ApiResponse {
    pub code: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestServer {
    pub async fn new() -> Self {
        Self::with_env(Vec::new()).await
    }

    pub async fn with_env(overrides: Vec<(&str, &str)>) -> Self {
        let tcp_listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to port");
        let port = tcp_listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let mut env = HashMap::from_iter(vec![
            ("SERVER_ADDRESS".to_string(), format!("127.0.0.1:{port}")),
            ("METRICS_ENABLED".to_string(), "false".to_string()),
        ]);
        for (key, value) in overrides {
            env.insert(key.to_string(), value.to_string());
        }

        let config =
            WebhookConfig::init_from_hashmap(&env).expect("Failed to initialize webhook config");
        config.validate().expect("Invalid webhook config");

        let server = Server::new(config.clone());
        tokio::spawn(async move { server.serve(tcp_listener).await });

        Self {
            port,
            client: reqwest::Client::new(),
            config,
        }
    }

    pub async fn send_request(&self, method: Method, body: &str) -> ApiResponse {
        let uri = format!("http://127.0.0.1:{}{}", self.port, self.config.webhook_path);

        let res = self
            .client
            .request(method, uri)
            .header("content-type", "application/json")
            .body(body.to_owned())
            .send()
            .await
            .expect("Failed to send request");

        let code = res.status();
        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = res.text().await.expect("Failed to read response body");

        ApiResponse {
            code,
            content_type,
            body,
        }
    }
}
