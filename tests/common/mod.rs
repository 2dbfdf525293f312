#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use movie_catalog_api::auth::TokenService;
use movie_catalog_api::config::AppConfig;
use movie_catalog_api::database::{MemoryStore, MovieRepository, UserRepository};
use movie_catalog_api::{app, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";

/// In-process server bound to a free port, torn down when dropped
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.server.host = "127.0.0.1".to_string();
    config.security.jwt_secret = TEST_SECRET.to_string();
    config.security.bcrypt_cost = 4;
    config
}

impl TestServer {
    /// Start a server backed by a fresh in-memory store
    pub async fn spawn() -> Result<Self> {
        let store = Arc::new(MemoryStore::new());
        Self::spawn_with(store.clone(), store).await
    }

    pub async fn spawn_with(
        users: Arc<dyn UserRepository>,
        movies: Arc<dyn MovieRepository>,
    ) -> Result<Self> {
        let mut config = test_config();
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        config.server.port = port;

        let tokens = TokenService::from_config(&config.security)?;
        let bind_addr = config.bind_address();
        let state = AppState::new(config, users, movies, tokens);

        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind {}", bind_addr))?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app(state)).await {
                eprintln!("test server stopped: {}", e);
            }
        });

        Ok(Self {
            port,
            base_url: format!("http://{}", bind_addr),
            client: reqwest::Client::new(),
            handle,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn signup(&self, username: &str, password: &str) -> Result<StatusCode> {
        let res = self
            .client
            .post(self.url("/signup"))
            .json(&json!({ "name": "Test User", "username": username, "password": password }))
            .send()
            .await?;
        Ok(res.status())
    }

    pub async fn signin(&self, username: &str, password: &str) -> Result<(StatusCode, Value)> {
        let res = self
            .client
            .post(self.url("/signin"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        let status = res.status();
        Ok((status, res.json::<Value>().await?))
    }

    /// Sign up and sign in; returns the `Authorization` header value
    pub async fn authorize(&self, username: &str) -> Result<String> {
        let password = "correct horse battery staple";
        assert_eq!(self.signup(username, password).await?, StatusCode::CREATED);

        let (status, body) = self.signin(username, password).await?;
        assert_eq!(status, StatusCode::OK, "signin failed: {}", body);

        body["token"]
            .as_str()
            .map(str::to_string)
            .context("signin response missing token")
    }

    pub async fn create_movie(&self, auth: &str, movie: &Value) -> Result<(StatusCode, Value)> {
        let res = self
            .client
            .post(self.url("/movies"))
            .header("Authorization", auth)
            .json(movie)
            .send()
            .await?;
        let status = res.status();
        Ok((status, res.json::<Value>().await?))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn sample_movie(title: &str) -> Value {
    json!({
        "title": title,
        "releaseDate": "2020",
        "genre": "Drama",
        "actors": ["A", "B", "C"]
    })
}
