#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Spawns the server on a random port against a wiremock upstream, so tests
//! exercise the full request path including the real provider client.

use billrag_server::{config::AppConfig, run};
use tokio::net::TcpListener;
use wiremock::MockServer;

/// A running test instance of the server plus its mocked upstream.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub mock_server: MockServer,
}

impl TestApp {
    /// Spawns the app with the upstream pointed at a fresh mock server.
    ///
    /// `api_key` controls whether the upstream credential is configured.
    pub async fn spawn(api_key: Option<&str>) -> anyhow::Result<Self> {
        let mock_server = MockServer::start().await;

        let config = AppConfig {
            port: 0,
            ai_api_url: format!("{}/v1/chat/completions", mock_server.uri()),
            ai_model: "gpt-4o-mini".to_string(),
            openai_api_key: api_key.map(String::from),
        };

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        let address = format!("http://127.0.0.1:{port}");

        tokio::spawn(async move {
            if let Err(e) = run(listener, config).await {
                eprintln!("Server error: {e}");
            }
        });

        Ok(Self {
            address,
            client: reqwest::Client::new(),
            mock_server,
        })
    }
}
