#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use uuid::Uuid;

use formcollector::config::{Config, DbSettings};
use formcollector::db::SubmissionStore;
use formcollector::error::StoreError;
use formcollector::models::{NewSubmission, Submission};

/// In-process store keeping submissions in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Submission>>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn insert(&self, submission: &NewSubmission) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let stored = submission.clone().into_stored(id, Utc::now());
        self.rows.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Submission>, StoreError> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

/// Store whose every operation fails, standing in for a broken datastore.
pub struct FailingStore;

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn insert(&self, _submission: &NewSubmission) -> Result<Uuid, StoreError> {
        Err(StoreError::Write(sqlx::Error::PoolClosed))
    }

    async fn find_all(&self) -> Result<Vec<Submission>, StoreError> {
        Err(StoreError::Read(sqlx::Error::PoolClosed))
    }
}

/// A running test server instance backed by the given store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Post form-urlencoded fields to `/submit`, return (status, body text).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (StatusCode, String) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        (status, resp.text().await.unwrap_or_default())
    }

    /// Post a JSON body to `/submit`, return (status, body text).
    pub async fn submit_json(&self, data: &Value) -> (StatusCode, String) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        (status, resp.text().await.unwrap_or_default())
    }

    /// Fetch the `/responses` listing, return (status, body text).
    pub async fn responses(&self) -> (StatusCode, String) {
        let resp = self
            .client
            .get(self.url("/responses"))
            .send()
            .await
            .expect("responses request failed");
        let status = resp.status();
        (status, resp.text().await.unwrap_or_default())
    }
}

pub fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

pub fn test_config(database_url: &str) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        public_dir: public_dir(),
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
        db: DbSettings {
            url: database_url.to_string(),
            max_connections: 2,
            connect_timeout: Duration::from_secs(2),
        },
    }
}

/// Spawn a test app serving on a random port around `store`.
pub async fn spawn_app(store: Arc<dyn SubmissionStore>) -> TestApp {
    let app = formcollector::build_app(store, test_config("postgres://unused/unused"));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp { addr, client }
}
