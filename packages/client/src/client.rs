//! The collection client: one stateless HTTP exchange per operation.

use std::collections::{BTreeMap, HashMap};

use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use docwire_value::wire::{WireDocument, WireValue};
use docwire_value::{decode_document, encode_fields, scalar_to_wire, Document, Scalar, Value};

use crate::query::{FilterOp, QueryResult, RunQueryRequest};
use crate::Error;

/// Options for a collection list. Both fields pass straight through as
/// query parameters; the client does not follow continuation tokens
/// itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListOptions {
    pub page_size: Option<i32>,
    pub page_token: Option<String>,
}

impl ListOptions {
    pub fn with_page_size(mut self, size: i32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn with_page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }
}

/// Async client for one document-store deployment.
///
/// All configuration is injected at construction: the base URL
/// addresses one database root, and default headers (typically
/// authorization) are attached to every request. Operations are
/// stateless and safe to issue concurrently; the underlying
/// `reqwest::Client` pools connections internally.
///
/// # Example
///
/// ```ignore
/// use docwire_client::CollectionClient;
/// use docwire_value::fields;
///
/// let client = CollectionClient::new(
///     "https://store.example.com/v1/projects/p/databases/(default)/documents",
/// )?
/// .with_default_header("Authorization", "Bearer token");
///
/// let quizzes = client.list_all("quizzes").await?;
/// let created = client
///     .create_document("schools", fields! { "name" => "Ada" })
///     .await?;
/// ```
pub struct CollectionClient {
    client: Client,
    base_url: Url,
    default_headers: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct ListResponse {
    #[serde(default)]
    documents: Vec<WireDocument>,
}

#[derive(Debug, Serialize)]
struct DocumentBody {
    fields: BTreeMap<String, WireValue>,
}

impl CollectionClient {
    /// Create a client for the given database root URL.
    ///
    /// The URL is normalized to a trailing slash so collection names
    /// join as path segments.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };

        Ok(Self {
            client: Client::new(),
            base_url,
            default_headers: HashMap::new(),
        })
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, TLS).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Add a default header sent with every request.
    pub fn with_default_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// List every document in a collection, in server-returned order.
    pub async fn list_all(&self, collection: &str) -> Result<Vec<Document>, Error> {
        self.list_with(collection, &ListOptions::default()).await
    }

    /// List a collection with an explicit page-size hint and/or
    /// continuation token.
    pub async fn list_with(
        &self,
        collection: &str,
        options: &ListOptions,
    ) -> Result<Vec<Document>, Error> {
        debug!(collection, "listing collection");

        let mut builder = self.client.get(self.collection_url(collection)?);
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(size) = options.page_size {
            query.push(("pageSize", size.to_string()));
        }
        if let Some(token) = &options.page_token {
            query.push(("pageToken", token.clone()));
        }
        if !query.is_empty() {
            builder = builder.query(&query);
        }

        let body = Self::success_body(self.send(builder).await?).await?;
        let list: ListResponse = serde_json::from_str(&body)?;
        Ok(list.documents.into_iter().map(decode_document).collect())
    }

    /// List the documents in a collection whose `field` compares to a
    /// scalar value via a structured query.
    ///
    /// Result envelopes without a document payload (query-progress
    /// markers) are dropped before decoding.
    pub async fn list_filtered(
        &self,
        collection: &str,
        field: &str,
        op: FilterOp,
        value: impl Into<Scalar>,
    ) -> Result<Vec<Document>, Error> {
        debug!(collection, field, "running filtered query");

        let request =
            RunQueryRequest::field_filter(collection, field, op, scalar_to_wire(value.into()));
        let builder = self.client.post(self.run_query_url()).json(&request);

        let body = Self::success_body(self.send(builder).await?).await?;
        let results: Vec<QueryResult> = serde_json::from_str(&body)?;
        Ok(results
            .into_iter()
            .filter_map(|r| r.document)
            .map(decode_document)
            .collect())
    }

    /// Point-read one document. `Ok(None)` means the document does not
    /// exist; any other non-success status is an error.
    pub async fn get_one(&self, collection: &str, id: &str) -> Result<Option<Document>, Error> {
        debug!(collection, id, "reading document");

        let builder = self.client.get(self.document_url(collection, id)?);
        let response = self.send(builder).await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = Self::success_body(response).await?;
        let doc: WireDocument = serde_json::from_str(&body)?;
        Ok(Some(decode_document(doc)))
    }

    /// Create a document with a store-assigned id. Returns the decoded
    /// document as the store stored it.
    ///
    /// Not idempotent: retrying a creation that already succeeded
    /// creates a duplicate, so this client never retries.
    pub async fn create_document(
        &self,
        collection: &str,
        data: BTreeMap<String, Value>,
    ) -> Result<Document, Error> {
        debug!(collection, "creating document");

        let body = DocumentBody {
            fields: encode_fields(data),
        };
        let builder = self.client.post(self.collection_url(collection)?).json(&body);

        let body = Self::success_body(self.send(builder).await?).await?;
        let doc: WireDocument = serde_json::from_str(&body)?;
        Ok(decode_document(doc))
    }

    /// Update a document's fields. Returns the decoded document as the
    /// store stored it.
    pub async fn update_document(
        &self,
        collection: &str,
        id: &str,
        data: BTreeMap<String, Value>,
    ) -> Result<Document, Error> {
        debug!(collection, id, "updating document");

        let body = DocumentBody {
            fields: encode_fields(data),
        };
        let builder = self
            .client
            .patch(self.document_url(collection, id)?)
            .json(&body);

        let body = Self::success_body(self.send(builder).await?).await?;
        let doc: WireDocument = serde_json::from_str(&body)?;
        Ok(decode_document(doc))
    }

    /// Delete one document. Any success status is `Ok(())`; the store's
    /// delete is idempotent, so 404 is not special-cased.
    pub async fn delete_document(&self, collection: &str, id: &str) -> Result<(), Error> {
        debug!(collection, id, "deleting document");

        let builder = self.client.delete(self.document_url(collection, id)?);
        Self::success_body(self.send(builder).await?).await?;
        Ok(())
    }

    fn collection_url(&self, collection: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(collection)?)
    }

    fn document_url(&self, collection: &str, id: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(&format!("{}/{}", collection, id))?)
    }

    /// The query endpoint hangs `:runQuery` off the database root
    /// itself, not off a collection.
    fn run_query_url(&self) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}:runQuery", url.path().trim_end_matches('/'));
        url.set_path(&path);
        url
    }

    async fn send(&self, mut builder: RequestBuilder) -> Result<Response, Error> {
        for (name, value) in &self.default_headers {
            builder = builder.header(name, value);
        }
        Ok(builder.send().await?)
    }

    /// Read the body of a response, mapping non-success statuses to
    /// `Error::Store` with the raw error body as details.
    async fn success_body(response: Response) -> Result<String, Error> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Store {
                status: status.as_u16(),
                details: body,
            });
        }
        Ok(body)
    }
}
