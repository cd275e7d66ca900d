//! RemoteStoreService: HTTP client for the relational backend
//!
//! Talks PostgREST conventions: `GET /rest/v1/<table>?select=*`, `POST` with
//! `Prefer: return=representation`, `PATCH`/`DELETE` filtered by `id=eq.<id>`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use shared::models::{Church, ChurchUpdate, Member, MemberUpdate};

use super::rows::{ChurchRow, MemberRow, church_update_columns, member_update_columns};
use super::RemoteStore;
use crate::utils::AppError;
use crate::AppResult;

/// Filter value for clear-all deletes; the backend refuses unconditional
/// deletes, so "id not equal to a never-assigned sentinel" matches every row.
const CLEAR_SENTINEL: &str = "00000000-0000-0000-0000-000000000000";

const MEMBERS_TABLE: &str = "membros";
const CHURCHES_TABLE: &str = "igrejas";

/// HTTP client for the relational backend
#[derive(Debug)]
pub struct RemoteStoreService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RemoteStoreService {
    /// Create the service. Fails with a configuration error before any
    /// network call when the connection fields are missing.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> AppResult<Self> {
        let base_url = base_url.into();
        let api_key = api_key.into();

        if base_url.trim().is_empty() {
            return Err(AppError::configuration("Remote store URL is not set"));
        }
        if api_key.trim().is_empty() {
            return Err(AppError::configuration("Remote store API key is not set"));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Map a non-success response to the error taxonomy, embedding the
    /// backend's message
    async fn check(response: reqwest::Response) -> AppResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = format!("{status}: {body}");
        if status == reqwest::StatusCode::NOT_FOUND {
            Err(AppError::not_found(message))
        } else if status.is_client_error() {
            Err(AppError::validation(message))
        } else {
            Err(AppError::remote(message))
        }
    }

    async fn read_rows<T: serde::de::DeserializeOwned>(
        &self,
        table: &str,
        order: &str,
    ) -> AppResult<Vec<T>> {
        let url = format!("{}?select=*&order={}.asc", self.table_url(table), order);
        let response = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .map_err(|e| AppError::remote(format!("Failed to query {table}: {e}")))?;
        let response = Self::check(response).await?;
        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| AppError::remote(format!("Failed to parse {table} rows: {e}")))?;
        Ok(rows)
    }

    async fn insert_row<T, R>(&self, table: &str, row: &T) -> AppResult<R>
    where
        T: serde::Serialize + Sync,
        R: serde::de::DeserializeOwned,
    {
        let response = self
            .request(reqwest::Method::POST, &self.table_url(table))
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await
            .map_err(|e| AppError::remote(format!("Failed to insert into {table}: {e}")))?;
        let response = Self::check(response).await?;
        let mut rows: Vec<R> = response
            .json()
            .await
            .map_err(|e| AppError::remote(format!("Failed to parse inserted {table} row: {e}")))?;
        rows.pop()
            .ok_or_else(|| AppError::remote(format!("Insert into {table} returned no row")))
    }

    async fn patch_row<R: serde::de::DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
        columns: &Map<String, Value>,
    ) -> AppResult<R> {
        let url = format!("{}?id=eq.{}", self.table_url(table), id);
        let response = self
            .request(reqwest::Method::PATCH, &url)
            .header("Prefer", "return=representation")
            .json(columns)
            .send()
            .await
            .map_err(|e| AppError::remote(format!("Failed to update {table}: {e}")))?;
        let response = Self::check(response).await?;
        let mut rows: Vec<R> = response
            .json()
            .await
            .map_err(|e| AppError::remote(format!("Failed to parse updated {table} row: {e}")))?;
        rows.pop()
            .ok_or_else(|| AppError::not_found(format!("{table} id {id}")))
    }

    async fn delete_row(&self, table: &str, id: &str) -> AppResult<()> {
        let url = format!("{}?id=eq.{}", self.table_url(table), id);
        let response = self
            .request(reqwest::Method::DELETE, &url)
            .send()
            .await
            .map_err(|e| AppError::remote(format!("Failed to delete from {table}: {e}")))?;
        Self::check(response).await?;
        Ok(())
    }

    async fn insert_chunk<T: serde::Serialize + Sync>(
        &self,
        table: &str,
        rows: &[T],
    ) -> AppResult<()> {
        let response = self
            .request(reqwest::Method::POST, &self.table_url(table))
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await
            .map_err(|e| AppError::remote(format!("Failed bulk insert into {table}: {e}")))?;
        Self::check(response).await?;
        Ok(())
    }

    async fn clear_table(&self, table: &str) -> AppResult<()> {
        let url = format!("{}?id=neq.{}", self.table_url(table), CLEAR_SENTINEL);
        let response = self
            .request(reqwest::Method::DELETE, &url)
            .send()
            .await
            .map_err(|e| AppError::remote(format!("Failed to clear {table}: {e}")))?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for RemoteStoreService {
    async fn read_members(&self) -> AppResult<Vec<Member>> {
        let rows: Vec<MemberRow> = self.read_rows(MEMBERS_TABLE, "nome_completo").await?;
        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn write_member(&self, member: &Member) -> AppResult<Member> {
        let row = MemberRow::for_insert(member);
        let inserted: MemberRow = self.insert_row(MEMBERS_TABLE, &row).await?;
        Ok(Member::from(inserted))
    }

    async fn update_member(&self, id: &str, update: &MemberUpdate) -> AppResult<Member> {
        let columns = member_update_columns(update);
        let updated: MemberRow = self.patch_row(MEMBERS_TABLE, id, &columns).await?;
        Ok(Member::from(updated))
    }

    async fn delete_member(&self, id: &str) -> AppResult<()> {
        self.delete_row(MEMBERS_TABLE, id).await
    }

    async fn insert_members_chunk(&self, chunk: &[Member]) -> AppResult<()> {
        let rows: Vec<MemberRow> = chunk.iter().map(MemberRow::for_insert).collect();
        self.insert_chunk(MEMBERS_TABLE, &rows).await
    }

    async fn clear_members(&self) -> AppResult<()> {
        self.clear_table(MEMBERS_TABLE).await
    }

    async fn read_churches(&self) -> AppResult<Vec<Church>> {
        let rows: Vec<ChurchRow> = self.read_rows(CHURCHES_TABLE, "nome").await?;
        Ok(rows.into_iter().map(Church::from).collect())
    }

    async fn write_church(&self, church: &Church) -> AppResult<Church> {
        let row = ChurchRow::for_insert(church);
        let inserted: ChurchRow = self.insert_row(CHURCHES_TABLE, &row).await?;
        Ok(Church::from(inserted))
    }

    async fn update_church(&self, id: &str, update: &ChurchUpdate) -> AppResult<Church> {
        let columns = church_update_columns(update);
        let updated: ChurchRow = self.patch_row(CHURCHES_TABLE, id, &columns).await?;
        Ok(Church::from(updated))
    }

    async fn delete_church(&self, id: &str) -> AppResult<()> {
        self.delete_row(CHURCHES_TABLE, id).await
    }

    async fn insert_churches_chunk(&self, chunk: &[Church]) -> AppResult<()> {
        let rows: Vec<ChurchRow> = chunk.iter().map(ChurchRow::for_insert).collect();
        self.insert_chunk(CHURCHES_TABLE, &rows).await
    }

    async fn clear_churches(&self) -> AppResult<()> {
        self.clear_table(CHURCHES_TABLE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_connection_fields_fail_before_any_call() {
        let err = RemoteStoreService::new("", "key").unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));

        let err = RemoteStoreService::new("https://db.example", " ").unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let service = RemoteStoreService::new("https://db.example/", "key").unwrap();
        assert_eq!(
            service.table_url("membros"),
            "https://db.example/rest/v1/membros"
        );
    }
}
