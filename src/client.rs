//! Typed HTTP client for the REST API, used by the CLI subcommands.
//!
//! One short-lived client per CLI invocation. Non-2xx responses become
//! errors carrying the server's `error` message; connection failures
//! surface the underlying cause with context. No retries.

use anyhow::{bail, Context as _, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::{Task, TaskPatch, User, UserPatch};
use crate::service::StoreStats;

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client targeting the API at `base_url` (10-second timeout).
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub async fn health(&self) -> Result<Value> {
        self.request(self.http.get(self.url("/health"))).await
    }

    pub async fn stats(&self) -> Result<StoreStats> {
        self.request(self.http.get(self.url("/stats"))).await
    }

    // ─── Users ───────────────────────────────────────────────────────────

    pub async fn create_user(&self, name: &str, email: &str, age: Option<u32>) -> Result<User> {
        let mut body = serde_json::json!({ "name": name, "email": email });
        if let Some(age) = age {
            body["age"] = age.into();
        }
        self.request(self.http.post(self.url("/users")).json(&body))
            .await
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.request(self.http.get(self.url("/users"))).await
    }

    pub async fn get_user(&self, id: u64) -> Result<User> {
        self.request(self.http.get(self.url(&format!("/users/{id}"))))
            .await
    }

    pub async fn update_user(&self, id: u64, patch: &UserPatch) -> Result<User> {
        let mut body = serde_json::Map::new();
        if let Some(name) = &patch.name {
            body.insert("name".into(), name.clone().into());
        }
        if let Some(email) = &patch.email {
            body.insert("email".into(), email.clone().into());
        }
        if let Some(age) = patch.age {
            body.insert("age".into(), age.into());
        }
        self.request(self.http.put(self.url(&format!("/users/{id}"))).json(&body))
            .await
    }

    pub async fn delete_user(&self, id: u64) -> Result<()> {
        let _: Value = self
            .request(self.http.delete(self.url(&format!("/users/{id}"))))
            .await?;
        Ok(())
    }

    // ─── Tasks ───────────────────────────────────────────────────────────

    pub async fn create_task(
        &self,
        title: &str,
        description: Option<&str>,
        owner_id: Option<u64>,
    ) -> Result<Task> {
        let mut body = serde_json::json!({ "title": title });
        if let Some(description) = description {
            body["description"] = description.into();
        }
        if let Some(owner_id) = owner_id {
            body["owner_id"] = owner_id.into();
        }
        self.request(self.http.post(self.url("/tasks")).json(&body))
            .await
    }

    pub async fn list_tasks(
        &self,
        completed: Option<bool>,
        owner_id: Option<u64>,
    ) -> Result<Vec<Task>> {
        let mut req = self.http.get(self.url("/tasks"));
        if let Some(completed) = completed {
            req = req.query(&[("completed", completed.to_string())]);
        }
        if let Some(owner_id) = owner_id {
            req = req.query(&[("owner_id", owner_id.to_string())]);
        }
        self.request(req).await
    }

    pub async fn get_task(&self, id: u64) -> Result<Task> {
        self.request(self.http.get(self.url(&format!("/tasks/{id}"))))
            .await
    }

    pub async fn update_task(&self, id: u64, patch: &TaskPatch) -> Result<Task> {
        let mut body = serde_json::Map::new();
        if let Some(title) = &patch.title {
            body.insert("title".into(), title.clone().into());
        }
        if let Some(description) = &patch.description {
            body.insert("description".into(), description.clone().into());
        }
        if let Some(completed) = patch.completed {
            body.insert("completed".into(), completed.into());
        }
        if let Some(owner_id) = patch.owner_id {
            body.insert("owner_id".into(), owner_id.into());
        }
        self.request(self.http.put(self.url(&format!("/tasks/{id}"))).json(&body))
            .await
    }

    pub async fn complete_task(&self, id: u64) -> Result<Task> {
        self.request(self.http.patch(self.url(&format!("/tasks/{id}/complete"))))
            .await
    }

    pub async fn delete_task(&self, id: u64) -> Result<()> {
        let _: Value = self
            .request(self.http.delete(self.url(&format!("/tasks/{id}"))))
            .await?;
        Ok(())
    }

    // ─── Helpers ─────────────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send the request, check the status, and deserialize the body.
    /// Non-2xx responses become errors carrying the server's message.
    async fn request<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T> {
        let resp = req
            .send()
            .await
            .with_context(|| format!("failed to connect to API at {}", self.base_url))?;

        let status = resp.status();
        if status.is_success() {
            return resp.json().await.context("invalid JSON in API response");
        }

        let message = resp
            .json::<Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_owned))
            .unwrap_or_else(|| format!("HTTP {status}"));
        bail!("API error ({status}): {message}");
    }
}
