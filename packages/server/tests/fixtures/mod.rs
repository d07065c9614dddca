//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use reqwest::header::HeaderValue;
use serde_json::{Value, json};
use tokio::{net::TcpListener, task::JoinHandle};
use yoriai_server::{PresenceConfig, ui::state::AppState};

/// `user` header value for any UTF-8 name
pub fn user_header(name: &str) -> HeaderValue {
    HeaderValue::from_bytes(name.as_bytes()).expect("Invalid header bytes")
}

/// In-process server bound to an ephemeral port, stopped on drop.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<std::io::Result<()>>,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a server whose sweeper never fires during a test
    pub async fn start() -> Self {
        Self::start_with(PresenceConfig {
            sweep_interval: Duration::from_secs(3600),
            stale_after: Duration::from_secs(3600),
        })
        .await
    }

    pub async fn start_with(presence: PresenceConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let state = Arc::new(AppState::in_memory());
        let handle = tokio::spawn(yoriai_server::ui::serve(
            listener,
            state,
            presence,
            std::future::pending(),
        ));

        Self {
            addr,
            handle,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub async fn register(&self, name: &str) -> reqwest::Response {
        self.client
            .post(self.url("/participants"))
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn post_message(
        &self,
        user: &str,
        to: &str,
        text: &str,
        kind: &str,
    ) -> reqwest::Response {
        self.client
            .post(self.url("/messages"))
            .header("user", user_header(user))
            .json(&json!({ "to": to, "text": text, "type": kind }))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn messages(&self, user: &str, limit: Option<&str>) -> reqwest::Response {
        let mut request = self
            .client
            .get(self.url("/messages"))
            .header("user", user_header(user));
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }
        request.send().await.expect("Failed to send request")
    }

    /// Messages visible to `user`, asserting a 200 response
    pub async fn visible_messages(&self, user: &str) -> Vec<Value> {
        let response = self.messages(user, None).await;
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.expect("Failed to parse JSON");
        body.as_array().cloned().expect("Response should be an array")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
