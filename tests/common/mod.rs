#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use golf_league_api::auth::{JwtKeys, TokenRequest};
use golf_league_api::config::AppConfig;
use golf_league_api::routes;
use golf_league_api::state::AppState;
use golf_league_api::testing::InMemoryStore;

/// Claims a test token carries
#[derive(Debug, Clone, Copy)]
pub enum Access {
    /// Valid token, neither flag set
    Member,
    Trusted,
    Admin,
}

/// The full router over an in-memory store, driven without a socket
pub struct TestApp {
    pub store: InMemoryStore,
    router: Router,
    keys: JwtKeys,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
    pub body: Value,
}

impl TestResponse {
    pub fn location(&self) -> &str {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    /// Messages filed under `field` in a validation error body
    pub fn field_errors(&self, field: &str) -> Vec<String> {
        self.body["errors"][field]
            .as_array()
            .map(|a| a.iter().filter_map(|m| m.as_str().map(str::to_string)).collect())
            .unwrap_or_default()
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::development())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let keys = JwtKeys::from_config(&config.security).expect("development signing key");
        let store = InMemoryStore::new();
        let state = AppState::new(store.repositories(), Arc::new(store.clone()), keys.clone());
        let router = routes::router(state, &config);
        Self { store, router, keys }
    }

    pub fn token(&self, access: Access) -> String {
        let request = TokenRequest {
            is_admin: matches!(access, Access::Admin),
            is_trusted: matches!(access, Access::Trusted),
            ..TokenRequest::default()
        };
        self.keys.issue(&request).expect("token")
    }

    pub async fn send(&self, method: Method, uri: &str, token: Option<&str>, body: Option<&Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(json).expect("json body"))
            }
            None => Body::empty(),
        };
        self.send_request(builder.body(body).expect("request")).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.expect("infallible router");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse {
            status,
            headers,
            text,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn get_as(&self, access: Access, uri: &str) -> TestResponse {
        let token = self.token(access);
        self.send(Method::GET, uri, Some(&token), None).await
    }

    pub async fn post_as(&self, access: Access, uri: &str, body: &Value) -> TestResponse {
        let token = self.token(access);
        self.send(Method::POST, uri, Some(&token), Some(body)).await
    }

    pub async fn put_as(&self, access: Access, uri: &str, body: &Value) -> TestResponse {
        let token = self.token(access);
        self.send(Method::PUT, uri, Some(&token), Some(body)).await
    }

    pub async fn delete_as(&self, access: Access, uri: &str) -> TestResponse {
        let token = self.token(access);
        self.send(Method::DELETE, uri, Some(&token), None).await
    }

    /// Create a golfer and return its id
    pub async fn seed_golfer(&self, email: &str) -> i64 {
        let response = self.post_as(Access::Member, "/api/golfers", &golfer_body(email)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
        response.body["id"].as_i64().expect("golfer id")
    }

    /// Create a tournament and return its id
    pub async fn seed_tournament(&self, name: &str, format: &str) -> i64 {
        let body = serde_json::json!({"name": name, "format": format});
        let response = self.post_as(Access::Member, "/api/tournaments", &body).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
        response.body["id"].as_i64().expect("tournament id")
    }
}

pub fn golfer_body(email: &str) -> Value {
    serde_json::json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": email,
        "joinDate": "2020-01-01",
        "handicap": 12
    })
}

// --- Spawned server, for the PostgreSQL suite ---

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary; assumes the debug profile
        let child = Command::new("target/debug/golf-league-api")
            .args(["serve", "--port", &port.to_string()])
            .env("DATABASE_RUN_MIGRATIONS", "true")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            let url = format!("{}/_health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == reqwest::StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(15)).await?;
    Ok(server)
}

/// Token signed with the same configuration the spawned server reads
pub fn server_token(access: Access) -> Result<String> {
    let _ = dotenvy::dotenv();
    let keys = JwtKeys::from_config(&AppConfig::from_env().security)?;
    Ok(keys.issue(&TokenRequest {
        is_admin: matches!(access, Access::Admin),
        is_trusted: matches!(access, Access::Trusted),
        ..TokenRequest::default()
    })?)
}
