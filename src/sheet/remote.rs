use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::{SheetError, SheetStore, Table};
use crate::settings::StoreSettings;

/// Service-credential blob saved next to the settings file. Without it every
/// data operation is off the table, so `connect` refuses to start.
#[derive(Debug, Deserialize)]
struct Credential {
    token: String,
    #[serde(default)]
    account: String,
}

#[derive(Debug, Deserialize)]
struct FindReply {
    position: Option<usize>,
}

/// Blocking client for the row-store service. Every operation is one fresh
/// synchronous call: no retries, no backoff, no circuit breaker. A failed
/// call surfaces immediately and the next interaction tries again.
pub struct RemoteStore {
    http: reqwest::blocking::Client,
    base_url: String,
    document: String,
    token: String,
}

impl RemoteStore {
    pub fn connect(cfg: &StoreSettings) -> Result<Self, SheetError> {
        let raw = std::fs::read_to_string(&cfg.credential_path).map_err(|e| {
            SheetError::Credential(format!("{}: {e}", cfg.credential_path))
        })?;
        let credential: Credential = serde_json::from_str(&raw)
            .map_err(|e| SheetError::Credential(format!("{}: {e}", cfg.credential_path)))?;
        if credential.token.trim().is_empty() {
            return Err(SheetError::Credential(format!(
                "{}: empty token",
                cfg.credential_path
            )));
        }
        if !credential.account.is_empty() {
            tracing::debug!(account = %credential.account, "store credential loaded");
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            document: cfg.document.clone(),
            token: credential.token,
        })
    }

    fn url(&self, tab: &str, suffix: &str) -> String {
        format!(
            "{}/sheets/{}/{}{}",
            self.base_url, self.document, tab, suffix
        )
    }

    fn check(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, SheetError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(SheetError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl SheetStore for RemoteStore {
    fn read_all(&self, tab: &str) -> Result<Table, SheetError> {
        let response = self
            .http
            .get(self.url(tab, "/rows"))
            .bearer_auth(&self.token)
            .send()?;
        let table: Table = Self::check(response)?
            .json()
            .map_err(|e| SheetError::Payload(e.to_string()))?;
        tracing::debug!(tab, rows = table.rows.len(), "read sheet");
        Ok(table)
    }

    fn append_row(&self, tab: &str, values: &[Value]) -> Result<(), SheetError> {
        let response = self
            .http
            .post(self.url(tab, "/rows"))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "values": values }))
            .send()?;
        Self::check(response)?;
        tracing::info!(tab, "appended row");
        Ok(())
    }

    fn delete_row(&self, tab: &str, position: usize) -> Result<(), SheetError> {
        let response = self
            .http
            .delete(self.url(tab, &format!("/rows/{position}")))
            .bearer_auth(&self.token)
            .send()?;
        Self::check(response)?;
        tracing::info!(tab, position, "deleted row");
        Ok(())
    }

    fn rewrite(&self, tab: &str, table: &Table) -> Result<(), SheetError> {
        let response = self
            .http
            .put(self.url(tab, ""))
            .bearer_auth(&self.token)
            .json(table)
            .send()?;
        Self::check(response)?;
        tracing::info!(tab, rows = table.rows.len(), "rewrote sheet");
        Ok(())
    }

    fn find_row(&self, tab: &str, key: &str) -> Result<Option<usize>, SheetError> {
        let response = self
            .http
            .get(self.url(tab, "/find"))
            .query(&[("value", key)])
            .bearer_auth(&self.token)
            .send()?;
        let reply: FindReply = Self::check(response)?
            .json()
            .map_err(|e| SheetError::Payload(e.to_string()))?;
        Ok(reply.position)
    }
}
