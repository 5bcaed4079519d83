use anyhow::{Context, Result, bail};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use atelier_core::{Client, Connection, ContactLog, Instrument, RepairTask, SaleRecord};

/// Client for the shop backend. Collections are flat JSON arrays under
/// `{base_url}/{collection}`; auth is a bearer key.
#[derive(Debug, Clone)]
pub struct ShopApi {
    base_url: String,
    http: reqwest::Client,
}

impl ShopApi {
    pub fn new(base_url: impl Into<String>, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .context("api key contains characters invalid in a header")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("build http client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn list<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, collection);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("GET {url} failed: {status} {}", snippet(&body));
        }

        resp.json::<Vec<T>>()
            .await
            .with_context(|| format!("decoding {collection} response"))
    }

    async fn get_one<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Result<T> {
        let url = format!("{}/{}/{}", self.base_url, collection, id);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("GET {url} failed: {status} {}", snippet(&body));
        }

        resp.json::<T>()
            .await
            .with_context(|| format!("decoding {collection}/{id} response"))
    }

    pub async fn list_tasks(&self) -> Result<Vec<RepairTask>> {
        self.list("tasks").await
    }

    pub async fn get_task(&self, id: &str) -> Result<RepairTask> {
        self.get_one("tasks", id).await
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        self.list("clients").await
    }

    pub async fn list_instruments(&self) -> Result<Vec<Instrument>> {
        self.list("instruments").await
    }

    pub async fn list_connections(&self) -> Result<Vec<Connection>> {
        self.list("connections").await
    }

    pub async fn list_sales(&self) -> Result<Vec<SaleRecord>> {
        self.list("sales").await
    }

    pub async fn list_contact_logs(&self) -> Result<Vec<ContactLog>> {
        self.list("contact_logs").await
    }
}

/// First line of an error body, truncated; backends love to return HTML pages.
fn snippet(body: &str) -> &str {
    let line = body.lines().next().unwrap_or("");
    let end = line
        .char_indices()
        .nth(200)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    &line[..end]
}
