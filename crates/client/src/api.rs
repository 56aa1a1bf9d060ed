//! REST client for the family-tree HTTP surface.
//!
//! Wraps the six service operations (list, get, create, update, delete,
//! swap) using [`reqwest`], decoding success bodies into `kintree-core`
//! types and non-success bodies into structured [`ClientError`]s.

use serde::Deserialize;

use kintree_core::member::{
    CreateFamilyMember, FamilyMember, SwapRequest, SwapResponse, UpdateFamilyMember,
};
use kintree_core::DbId;

/// HTTP client for a single family-tree service instance.
pub struct FamilyApi {
    client: reqwest::Client,
    base_url: String,
}

/// Error body returned by the service on non-2xx responses.
#[derive(Debug, Deserialize)]
struct WireError {
    message: String,
    field: Option<String>,
}

/// Errors from the REST client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a decodable response (network, DNS,
    /// TLS, or body decode failure).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        /// Status the service answered with.
        status: u16,
        /// `message` from the error body, or the raw body text when the
        /// body is not the expected JSON shape.
        message: String,
        /// Offending request field, when the service names one.
        field: Option<String>,
    },
}

impl FamilyApi {
    /// Create a new client for the service at `base_url`,
    /// e.g. `http://localhost:3000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Fetch every family member as a flat list.
    pub async fn list(&self) -> Result<Vec<FamilyMember>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/family", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch a single member by id.
    pub async fn get(&self, id: DbId) -> Result<FamilyMember, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/family/{id}", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a member, returning the stored record with its generated id.
    pub async fn create(&self, input: &CreateFamilyMember) -> Result<FamilyMember, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/family", self.base_url))
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Apply a partial update, returning the full updated record.
    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateFamilyMember,
    ) -> Result<FamilyMember, ClientError> {
        let response = self
            .client
            .put(format!("{}/api/family/{id}", self.base_url))
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Delete a member. Succeeds whether or not the member existed.
    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}/api/family/{id}", self.base_url))
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Exchange the sibling positions of two members.
    pub async fn swap(&self, id1: DbId, id2: DbId) -> Result<SwapResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/family/swap", self.base_url))
            .json(&SwapRequest { id1, id2 })
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Insert a new member above an existing one.
    ///
    /// Creates `input` as a root, then re-points `child_id` at the new
    /// member. Two sequential calls; if the second fails the new member
    /// remains in the tree as a root.
    pub async fn add_parent(
        &self,
        child_id: DbId,
        input: &CreateFamilyMember,
    ) -> Result<FamilyMember, ClientError> {
        let parent = self.create(input).await?;

        let reparent = UpdateFamilyMember {
            parent_id: Some(Some(parent.id)),
            ..UpdateFamilyMember::default()
        };
        self.update(child_id, &reparent).await?;

        Ok(parent)
    }

    // ---- private helpers ----

    /// Turn a non-2xx response into [`ClientError::Api`], decoding the
    /// service's `{message, field?}` body when it parses and falling
    /// back to the raw body text. Success responses pass through.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let (message, field) = match serde_json::from_str::<WireError>(&body) {
                Ok(err) => (err.message, err.field),
                Err(_) => (body, None),
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
                field,
            });
        }
        Ok(response)
    }

    /// Decode the body of a successful response.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// [`Self::parse_response`] for endpoints whose success body is empty.
    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
