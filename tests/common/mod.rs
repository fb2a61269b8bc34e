//! Shared harness: the real router over a fresh in-memory database, served on
//! an ephemeral port.

#![allow(dead_code)]

use reqwest::{header, Client, Response};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tokio::net::TcpListener;

use sensorhub::common::AppState;
use sensorhub::config::Config;
use sensorhub::routes;

pub struct TestApp {
    pub base_url: String,
    pub client: Client,
    pub db: DatabaseConnection,
}

pub async fn spawn_app() -> TestApp {
    let state = AppState::initialize(Config::in_memory())
        .await
        .expect("in-memory database should initialise");
    let db = state.db.clone();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = routes::build_router(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        base_url: format!("http://{addr}"),
        client: Client::new(),
        db,
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.client.delete(self.url(path)).send().await.unwrap()
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    /// POST a body that is declared as something other than JSON.
    pub async fn post_raw(&self, path: &str, content_type: &str, body: &'static str) -> Response {
        self.client
            .post(self.url(path))
            .header(header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .unwrap()
    }
}

pub fn location_of(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}
