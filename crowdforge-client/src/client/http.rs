//! Shared request execution for the resource clients
//!
//! Every resource client funnels through the verb helpers here; this is the
//! seam where a [`SearchRequest`] becomes query parameters and where a `202
//! Accepted` body becomes a poll-ready [`Operation`].

use std::sync::Arc;

use futures::SinkExt;
use futures::channel::mpsc;
use log::{debug, trace};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::results::{BatchCreateResult, ModificationResult, SearchResult};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::operations::{Operation, OperationPoller};
use crate::search::SearchRequest;

const CODE_VALIDATION: &str = "VALIDATION_ERROR";
const CODE_DOES_NOT_EXIST: &str = "DOES_NOT_EXIST";

/// Elements in flight between the serializer task and the request body.
const STREAM_CHANNEL_CAPACITY: usize = 16;

/// Error body the API attaches to non-2xx responses.
#[derive(Debug, Default, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    payload: Option<Value>,
}

/// Fail fast on unusable required arguments, before any network I/O.
pub(crate) fn require(value: &str, what: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(what));
    }
    Ok(())
}

/// Shared transport state behind every resource client.
pub(crate) struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
}

impl ClientInner {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| Error::InvalidArgument("token contains invalid header characters"))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;
        let base_url = Url::parse(&config.base_url)
            .map_err(|_| Error::InvalidArgument("base URL is not a valid URL"))?;

        Ok(Self { http, base_url })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .map_err(|_| Error::InvalidArgument("request path is not valid"))?;
        debug!("{method} {url}");
        Ok(self.http.request(method, url))
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        trace!("response status {}", response.status());
        Ok(response)
    }

    /// GET a single resource. `Ok(None)` is the 404 branch; every other
    /// non-2xx maps through the error taxonomy.
    pub(crate) async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let response = self.dispatch(self.request(Method::GET, path)?).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check(response).await?;
        Ok(Some(response.json().await?))
    }

    /// GET a list endpoint with the request's flat query-parameter map.
    pub(crate) async fn find<T: DeserializeOwned>(
        &self,
        path: &str,
        request: &SearchRequest,
    ) -> Result<SearchResult<T>> {
        let builder = self
            .request(Method::GET, path)?
            .query(&request.query_params());
        let response = check(self.dispatch(builder).await?).await?;
        Ok(response.json().await?)
    }

    /// POST a new resource; 201 marks it newly created, 200 an equivalent
    /// existing one.
    pub(crate) async fn create<T, B>(&self, path: &str, body: &B) -> Result<ModificationResult<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path)?.json(body);
        let response = check(self.dispatch(builder).await?).await?;
        let newly_created = response.status() == StatusCode::CREATED;
        Ok(ModificationResult {
            value: response.json().await?,
            newly_created,
        })
    }

    /// PUT a full replacement.
    pub(crate) async fn replace<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PUT, path)?.json(body);
        let response = check(self.dispatch(builder).await?).await?;
        Ok(response.json().await?)
    }

    /// PUT to a caller-chosen id; the status code tells created from
    /// replaced.
    pub(crate) async fn upsert<T, B>(&self, path: &str, body: &B) -> Result<ModificationResult<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PUT, path)?.json(body);
        let response = check(self.dispatch(builder).await?).await?;
        let newly_created = response.status() == StatusCode::CREATED;
        Ok(ModificationResult {
            value: response.json().await?,
            newly_created,
        })
    }

    /// PATCH a partial update. A missing id raises, unlike single GETs.
    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PATCH, path)?.json(body);
        let response = check(self.dispatch(builder).await?).await?;
        Ok(response.json().await?)
    }

    /// DELETE; a missing id raises, unlike single GETs.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self.dispatch(self.request(Method::DELETE, path)?).await?;
        check(response).await?;
        Ok(())
    }

    /// POST a batch for synchronous creation; partial success comes back per
    /// input index.
    pub(crate) async fn batch_create<T, B>(
        &self,
        path: &str,
        items: &[B],
    ) -> Result<BatchCreateResult<T>>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let builder = self.request(Method::POST, path)?.json(items);
        let response = check(self.dispatch(builder).await?).await?;
        Ok(response.json().await?)
    }

    /// POST a batch for asynchronous creation: the body streams element by
    /// element and the `202 Accepted` operation comes back bound to `poller`.
    pub(crate) async fn batch_create_async<B, I>(
        &self,
        path: &str,
        items: I,
        poller: Arc<dyn OperationPoller>,
    ) -> Result<Operation>
    where
        B: Serialize + Send + 'static,
        I: IntoIterator<Item = B> + Send + 'static,
        I::IntoIter: Send,
    {
        let builder = self
            .request(Method::POST, path)?
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(streaming_array_body(items));
        let response = check(self.dispatch(builder).await?).await?;
        let operation: Operation = response.json().await?;
        Ok(operation.bind(poller))
    }

    /// Fire an action that may complete synchronously. 202 carries an
    /// operation body to bind; 204 means the resource is already in the
    /// desired state and synthesizes a pseudo-operation.
    pub(crate) async fn post_operation(
        &self,
        path: &str,
        poller: Arc<dyn OperationPoller>,
    ) -> Result<Operation> {
        let response = self.dispatch(self.request(Method::POST, path)?).await?;
        if response.status() == StatusCode::NO_CONTENT {
            debug!("{path}: already in desired state, synthesizing pseudo-operation");
            return Ok(Operation::pseudo_success());
        }
        let response = check(response).await?;
        let operation: Operation = response.json().await?;
        Ok(operation.bind(poller))
    }
}

/// Map a non-2xx response to the typed error taxonomy.
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await?;
    Err(classify(status, &text))
}

fn classify(status: StatusCode, text: &str) -> Error {
    let body: ApiErrorBody = serde_json::from_str(text).unwrap_or_else(|_| ApiErrorBody {
        code: String::new(),
        message: text.trim().to_string(),
        payload: None,
    });

    if status == StatusCode::BAD_GATEWAY || status == StatusCode::SERVICE_UNAVAILABLE {
        return Error::ServiceUnavailable {
            status: status.as_u16(),
        };
    }
    if status == StatusCode::NOT_FOUND || body.code == CODE_DOES_NOT_EXIST {
        let code = if body.code.is_empty() {
            CODE_DOES_NOT_EXIST.to_string()
        } else {
            body.code
        };
        return Error::NotFound {
            code,
            message: body.message,
        };
    }
    if body.code == CODE_VALIDATION
        && let Some(errors) = body
            .payload
            .and_then(|payload| serde_json::from_value(payload).ok())
    {
        return Error::Validation { errors };
    }
    Error::Api {
        status: status.as_u16(),
        code: body.code,
        message: body.message,
    }
}

/// Serialize `items` one element at a time into a bounded channel feeding
/// the request body, so arbitrarily large batches never stage fully in
/// memory.
async fn produce_json_array<B, I>(
    items: I,
    mut tx: mpsc::Sender<std::result::Result<Vec<u8>, std::io::Error>>,
) where
    B: Serialize,
    I: IntoIterator<Item = B>,
{
    if tx.send(Ok(b"[".to_vec())).await.is_err() {
        return;
    }
    let mut first = true;
    for item in items {
        let mut chunk: Vec<u8> = if first { Vec::new() } else { vec![b','] };
        first = false;
        match serde_json::to_vec(&item) {
            Ok(json) => chunk.extend_from_slice(&json),
            Err(err) => {
                let _ = tx
                    .send(Err(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        err,
                    )))
                    .await;
                return;
            }
        }
        // A closed receiver means the request side went away; stop producing.
        if tx.send(Ok(chunk)).await.is_err() {
            return;
        }
    }
    let _ = tx.send(Ok(b"]".to_vec())).await;
}

fn streaming_array_body<B, I>(items: I) -> reqwest::Body
where
    B: Serialize + Send + 'static,
    I: IntoIterator<Item = B> + Send + 'static,
    I::IntoIter: Send,
{
    let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
    tokio::spawn(produce_json_array(items, tx));
    reqwest::Body::wrap_stream(rx)
}
