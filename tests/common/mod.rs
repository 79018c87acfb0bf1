#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use posts_api::auth::{issue_token, JwtIdentity};
use posts_api::database::models::NewUser;
use posts_api::database::{MemoryStore, UserStore};
use posts_api::{app, AppState};
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

const SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub base_url: String,
    pub store: MemoryStore,
    pub client: reqwest::Client,
}

pub struct TestUser {
    pub id: Uuid,
    pub token: String,
}

/// Serve the router on an ephemeral port, backed by a fresh in-memory store
pub async fn spawn_app() -> Result<TestApp> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let store = MemoryStore::new();
    let identity = JwtIdentity::new(SECRET)?;
    let state = AppState::new(Arc::new(store.clone()), Arc::new(store.clone()), Arc::new(identity));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, app(state, CorsLayer::new())).await.ok();
    });

    Ok(TestApp {
        base_url: format!("http://{}", addr),
        store,
        client: reqwest::Client::new(),
    })
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Seed a user record and mint a token for it
    pub async fn user(&self, name: &str) -> Result<TestUser> {
        let user = self
            .store
            .insert_user(NewUser {
                name: name.to_string(),
                email: None,
                avatar: Some(format!("https://avatars.example.com/{}.png", name)),
            })
            .await?;
        let token = issue_token(SECRET, user.id, 1)?;
        Ok(TestUser { id: user.id, token })
    }

    pub fn get(&self, user: &TestUser, path: &str) -> RequestBuilder {
        self.client.get(self.url(path)).header("x-auth-token", &user.token)
    }

    pub fn post(&self, user: &TestUser, path: &str) -> RequestBuilder {
        self.client.post(self.url(path)).header("x-auth-token", &user.token)
    }

    pub fn put(&self, user: &TestUser, path: &str) -> RequestBuilder {
        self.client.put(self.url(path)).header("x-auth-token", &user.token)
    }

    pub fn delete(&self, user: &TestUser, path: &str) -> RequestBuilder {
        self.client.delete(self.url(path)).header("x-auth-token", &user.token)
    }

    /// Create a post and return its JSON body
    pub async fn create_post(&self, user: &TestUser, text: &str) -> Result<Value> {
        let res = self
            .post(user, "/posts")
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;
        anyhow::ensure!(res.status().is_success(), "create failed: {}", res.status());
        Ok(res.json().await?)
    }
}

pub async fn json(res: Response) -> Result<Value> {
    Ok(res.json::<Value>().await?)
}

pub fn id_of(value: &Value) -> String {
    value["id"].as_str().unwrap_or_default().to_string()
}
